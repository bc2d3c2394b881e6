//! Non-interactive output of one page or one search.
//!
//! Cards are rendered by the same card list the TUI uses, without a cursor.

use std::io::{self, Write};
use std::sync::Arc;

use reviewdesk::tui::components::CardList;
use reviewdesk::{
    HttpReviewGateway, PAGE_SIZE, PageResult, Review, ReviewGateway, ReviewdeskConfig,
    StderrJsonlTelemetrySink,
};

use super::AppError;

/// Column width used for printed cards.
const PRINT_WIDTH: usize = 80;

/// Prints page `page` of the review list to stdout.
///
/// # Errors
///
/// Returns an error when the gateway cannot be built, the request fails, or
/// stdout cannot be written.
pub async fn run_page(config: &ReviewdeskConfig, page: u32) -> Result<(), AppError> {
    let gateway = build_gateway(config)?;
    let result = gateway.list_page(page, PAGE_SIZE).await?;
    tracing::info!(page, items = result.items.len(), "page loaded");

    let mut stdout = io::stdout().lock();
    write_page_to(&mut stdout, &result)
}

/// Prints the reviews matching `term` to stdout.
///
/// # Errors
///
/// Returns an error when the gateway cannot be built, the request fails, or
/// stdout cannot be written.
pub async fn run_search(config: &ReviewdeskConfig, term: &str) -> Result<(), AppError> {
    let gateway = build_gateway(config)?;
    let reviews = gateway.search(term).await?;
    tracing::info!(term, items = reviews.len(), "search completed");

    let mut stdout = io::stdout().lock();
    write_search_to(&mut stdout, term, &reviews)
}

fn build_gateway(config: &ReviewdeskConfig) -> Result<HttpReviewGateway, AppError> {
    Ok(HttpReviewGateway::new(&config.api_url, config.timeout())?
        .with_telemetry(Arc::new(StderrJsonlTelemetrySink)))
}

/// Writes a page of cards followed by its pager label.
///
/// # Errors
///
/// Returns [`AppError::Io`] when the writer fails.
pub fn write_page_to<W: Write>(writer: &mut W, result: &PageResult) -> Result<(), AppError> {
    let cards = CardList::render(&result.items);
    write!(writer, "{}", cards.plain_view(PRINT_WIDTH))?;
    if result.info.has_pages() {
        writeln!(writer, "{}", result.info.label())?;
    }
    Ok(())
}

/// Writes the search heading followed by the matching cards.
///
/// # Errors
///
/// Returns [`AppError::Io`] when the writer fails.
pub fn write_search_to<W: Write>(
    writer: &mut W,
    term: &str,
    reviews: &[Review],
) -> Result<(), AppError> {
    writeln!(writer, "Resultados para \"{term}\":")?;
    writeln!(writer)?;
    let cards = CardList::render(reviews);
    write!(writer, "{}", cards.plain_view(PRINT_WIDTH))?;
    Ok(())
}
