use anyhow::{bail, Context, Result};
use clap::Parser;
use portfolio_site::core::animate::RevealOnce;
use portfolio_site::core::render::ACTIVE_LINK_CLASS;
use portfolio_site::core::scroll::ScrollSpy;
use portfolio_site::core::tracker::DEFAULT_TRIGGER_OFFSET;
use portfolio_site::core::ScrollTracker;
use portfolio_site::utils::logger;
use portfolio_site::{ContentStore, PageOptions, PortfolioView, SectionId, SectionLayout, SiteConfig};

#[derive(Parser)]
#[command(name = "scroll-trace")]
#[command(about = "Replay a scroll gesture against the portfolio and print nav highlight changes")]
struct Args {
    /// Section heights in page order: home,about,projects,skills
    #[arg(long, value_delimiter = ',', default_values_t = vec![900.0, 700.0, 1400.0, 900.0])]
    heights: Vec<f64>,

    /// Trigger point below the viewport top (nav bar height)
    #[arg(long, default_value_t = DEFAULT_TRIGGER_OFFSET)]
    trigger: f64,

    /// Pixels per scroll event for the continuous gesture
    #[arg(long, default_value_t = 40.0)]
    step: f64,

    /// Final scroll offset; defaults to the bottom of the page
    #[arg(long)]
    to: Option<f64>,

    /// Scroll back to the top after reaching the end
    #[arg(long)]
    back: bool,

    /// Smooth-scroll to a section instead of a continuous gesture
    #[arg(long, value_enum)]
    jump_to: Option<SectionId>,

    /// Scroll events used by --jump-to
    #[arg(long, default_value_t = 60)]
    steps: usize,

    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// TOML site file whose content should be rendered
    #[arg(short, long)]
    config: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

fn highlighted_link(nav: &str) -> Option<&str> {
    nav.lines()
        .find(|line| line.contains("data-nav=") && line.contains(&format!("capitalize {}", ACTIVE_LINK_CLASS)))
        .map(str::trim)
}

fn report(offset: f64, section: SectionId, view: &PortfolioView<'_>) {
    println!("{:>8.1}px  -> {}", offset, section);
    if let Some(link) = highlighted_link(&view.render_nav()) {
        println!("            {}", link);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    if args.step <= 0.0 {
        bail!("--step must be positive");
    }

    let store = match &args.config {
        Some(path) => SiteConfig::from_file(path)
            .and_then(|config| config.content_store())
            .with_context(|| format!("loading site file {}", path))?,
        None => ContentStore::builtin(),
    };
    let options = PageOptions {
        nav_offset: args.trigger,
        ..PageOptions::default()
    };
    let layout = SectionLayout::from_heights(&args.heights);
    let end = args.to.unwrap_or_else(|| layout.total_height());

    let mut view = PortfolioView::new(&store, &options);
    let mut animator = RevealOnce::new();
    let mut spy = ScrollSpy::new(layout, args.trigger, args.viewport);
    spy.tracker_mut()
        .on_active_section_change(Box::new(|section| tracing::debug!(%section, "nav highlight moved")));

    println!("{:>8.1}px  -> {} (initial)", 0.0, view.active_section());
    spy.scroll(0.0, &mut view, &mut animator);

    if let Some(target) = args.jump_to {
        let transitions = spy.scroll_to(target, args.steps, &mut view, &mut animator);
        for (offset, section) in transitions {
            println!("{:>8.1}px  -> {}", offset, section);
        }
        if let Some(link) = highlighted_link(&view.render_nav()) {
            println!("            {}", link);
        }
    } else {
        let mut offset = 0.0;
        while offset < end {
            offset = (offset + args.step).min(end);
            if let Some(section) = spy.scroll(offset, &mut view, &mut animator) {
                report(offset, section, &view);
            }
        }
        if args.back {
            while offset > 0.0 {
                offset = (offset - args.step).max(0.0);
                if let Some(section) = spy.scroll(offset, &mut view, &mut animator) {
                    report(offset, section, &view);
                }
            }
        }
    }

    println!("revealed: {}", animator.log().join(", "));
    Ok(())
}
