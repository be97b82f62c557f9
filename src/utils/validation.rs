use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;
use std::hash::Hash;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // written so that NaN, which compares false both ways, is rejected
    if !(value >= min && value <= max) {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Returns the first value that occurs more than once.
pub fn find_duplicate<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Copy,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values.into_iter().find(|value| !seen.insert(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("profile.github", "https://github.com/K4yan0").is_ok());
        assert!(validate_url("profile.github", "http://example.com").is_ok());
        assert!(validate_url("profile.github", "").is_err());
        assert!(validate_url("profile.github", "github.com/K4yan0").is_err());
        assert!(validate_url("profile.github", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("site.nav_offset", 80.0, 0.0, 400.0).is_ok());
        assert!(validate_range("site.nav_offset", -1.0, 0.0, 400.0).is_err());
        assert!(validate_range("site.nav_offset", 401.0, 0.0, 400.0).is_err());
        assert!(validate_range("site.nav_offset", f64::NAN, 0.0, 400.0).is_err());
    }

    #[test]
    fn test_find_duplicate() {
        assert_eq!(find_duplicate([1u32, 2, 3]), None);
        assert_eq!(find_duplicate([1u32, 2, 1, 2]), Some(1));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("profile.name", "Thomas P").is_ok());
        assert!(validate_non_empty_string("profile.name", "   ").is_err());
    }
}
