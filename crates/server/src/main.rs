// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::unused_async)]

use axum::{
    Router,
    extract::Form,
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use clap::Parser;
use paysplit_domain::{
    Advice, AnalysisResult, ChartBreakdown, FinanceInput, HousingStatus, PeriodMode,
    ValidationError, advice_messages, analyze, chart_breakdown, validate,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

mod render;

/// The form page. All amounts entered there are per paycheck; the page posts
/// to `/analyze` and swaps the returned fragment into its `#result` element.
const INDEX_HTML: &str = include_str!("../web/index.html");

/// Stylesheet for the form page and the result fragments.
const STYLES_CSS: &str = include_str!("../web/styles.css");

/// Paysplit Server - HTTP server for the Paysplit budget calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Form fields posted to `/analyze`.
///
/// Field names match the form markup exactly; keeping them stable is the
/// wire contract. This is the boundary type — it converts into the domain's
/// `FinanceInput` before anything is computed.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AnalyzeRequest {
    /// Rent or own.
    housing_status: HousingStatus,
    /// Housing payment per paycheck.
    housing_payment: f64,
    /// Auto loan payment per paycheck.
    auto_payment: f64,
    /// Credit card payment per paycheck.
    credit_payment: f64,
    /// Student loan payment per paycheck.
    student_payment: f64,
    /// Take-home pay per paycheck (after tax).
    monthly_after_tax_income: f64,
    /// Percentage of leftover cash to save.
    save_percent: f64,
    /// Display mode. Defaults to per-paycheck when absent.
    #[serde(default)]
    period_mode: PeriodMode,
    /// Annual-projection checkbox: present ("on") when checked, absent
    /// otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_annual: Option<String>,
}

impl AnalyzeRequest {
    /// Converts the wire-level form fields into a domain input.
    fn into_input(self) -> FinanceInput {
        FinanceInput {
            housing_status: self.housing_status,
            housing_payment: self.housing_payment,
            auto_payment: self.auto_payment,
            credit_payment: self.credit_payment,
            student_payment: self.student_payment,
            monthly_after_tax_income: self.monthly_after_tax_income,
            save_percent: self.save_percent,
            period_mode: self.period_mode,
            show_annual: self.show_annual.is_some(),
        }
    }
}

/// Serves the input form page.
async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serves the embedded stylesheet.
async fn handle_styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    )
}

/// Handles a budget form submission.
///
/// Validation failures render the error list and stop — the analyzer is
/// never invoked for invalid input. Valid input flows through analyzer,
/// advisor, and chart builder, all pure functions of this one request.
async fn handle_analyze(Form(request): Form<AnalyzeRequest>) -> Html<String> {
    let input: FinanceInput = request.into_input();

    let errors: Vec<ValidationError> = validate(&input);
    if !errors.is_empty() {
        debug!(violations = errors.len(), "Rejected form submission");
        return Html(render::error_fragment(&errors));
    }

    let result: AnalysisResult = analyze(&input);
    let advice: Vec<Advice> = advice_messages(&result);
    let chart: Option<ChartBreakdown> = chart_breakdown(&result);
    debug!(
        mode = %input.period_mode,
        can_save = result.can_save,
        advice_count = advice.len(),
        "Computed analysis"
    );

    Html(render::results_fragment(&input, &result, &advice, chart.as_ref()))
}

/// Builds the application router with all endpoints.
///
/// The router carries no state: every request is computed independently
/// from its form fields, so arbitrarily many requests can run in parallel
/// with no coordination.
fn build_router() -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/styles.css", get(handle_styles))
        .route("/analyze", post(handle_analyze))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Paysplit server");

    // Build router
    let app: Router = build_router();

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
