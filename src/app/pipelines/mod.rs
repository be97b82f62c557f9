pub mod static_site;
