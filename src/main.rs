use anyhow::{anyhow, Context, Result};
use clap::Parser;

use vendordesk::commands::render_page;
use vendordesk::logger;
use vendordesk::models::{AnalyticsPeriod, Settings};
use vendordesk::navigation::Page;
use vendordesk::services::filter::Criteria;
use vendordesk::services::state::{AppState, PageSession};

#[derive(Parser)]
#[command(name = "vendordesk", version, about = "Render a vendor-management page as JSON")]
struct Cli {
    /// Page id or path (dashboard, vendors, procurement, sla, risk, billing, analytics)
    #[arg(default_value = "dashboard")]
    page: String,
    /// Case-insensitive search text
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long, default_value = "all")]
    status: String,
    /// Vendor or procurement type (IT, Non-IT, Non-Banking)
    #[arg(long = "type", default_value = "all")]
    kind: String,
    #[arg(long, default_value = "all")]
    risk_level: String,
    /// Analytics window (1month, 3months, 6months, 1year)
    #[arg(long, default_value = "6months")]
    period: String,
    /// Show one vendor's detail instead of the vendor list
    #[arg(long, value_name = "ID")]
    vendor: Option<String>,
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn session(&self) -> Result<PageSession> {
        let page: Page = self.page.parse()?;
        let period: AnalyticsPeriod = self.period.parse()?;
        let criteria = Criteria::default()
            .with_query(self.query.as_str())
            .with_status(self.status.as_str())
            .with_kind(self.kind.as_str())
            .with_risk_level(self.risk_level.as_str());

        let session = PageSession::new(page).with_criteria(criteria).with_period(period);
        Ok(match &self.vendor {
            Some(id) if page == Page::Vendors => session.with_vendor(id.as_str()),
            Some(_) => return Err(anyhow!("--vendor only applies to the vendors page")),
            None => session,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().context("Load settings")?;
    logger::init(&settings);

    let state = AppState::load(settings).context("Build record store")?;
    let session = cli.session()?;
    tracing::info!(page = %session.page, title = session.page.title(), "rendering page");

    let view = render_page(&state, &session)
        .with_context(|| format!("Render {}", session.page.path()))?;
    let out = if cli.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    println!("{}", out);
    Ok(())
}
