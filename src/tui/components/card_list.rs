//! Card list component: renders reviews as cards.
//!
//! Rendering is a full replace: [`CardList::render`] builds a fresh list of
//! cards from the given reviews, keyed by review id. Each card derives its
//! edit and delete actions from its own data, so there is nothing to rebind
//! or re-query after a render.

use super::date_format::format_posted_on;
use super::text_truncate::{first_line_preview, truncate_with_ellipsis};
use super::text_wrap::wrap_lines;
use crate::api::Review;

/// Placeholder shown when there are no reviews to display.
pub const EMPTY_PLACEHOLDER: &str = "Nenhum review encontrado.";

/// Lines occupied by one collapsed card, including the separator line.
///
/// The selected card expands to show its whole content and may be taller.
pub const CARD_HEIGHT: usize = 5;

/// Columns of indentation before card body lines.
const BODY_INDENT: usize = 4;

/// Action offered by a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Load this review into the form for editing.
    Edit(Review),
    /// Delete the review with this id (after confirmation).
    Delete(u64),
}

/// One displayed review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    review: Review,
    date_label: String,
}

impl Card {
    fn from_review(review: &Review) -> Self {
        Self {
            date_label: format_posted_on(review.posted_on()),
            review: review.clone(),
        }
    }

    /// Returns the review id, which is also the card key.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.review.id
    }

    /// Returns the displayed title.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.review.title.as_str()
    }

    /// Returns the displayed content.
    #[must_use]
    pub const fn content(&self) -> &str {
        self.review.content.as_str()
    }

    /// Returns the formatted posting date.
    #[must_use]
    pub const fn date_label(&self) -> &str {
        self.date_label.as_str()
    }

    /// Returns the edit action bound to this card's data.
    #[must_use]
    pub fn edit_action(&self) -> CardAction {
        CardAction::Edit(self.review.clone())
    }

    /// Returns the delete action bound to this card's id.
    #[must_use]
    pub const fn delete_action(&self) -> CardAction {
        CardAction::Delete(self.review.id)
    }
}

/// Context for rendering the card list view.
#[derive(Debug, Clone)]
pub struct CardListViewContext<'a> {
    /// Index of the highlighted card.
    pub cursor_position: usize,
    /// Maximum visible height in lines.
    pub visible_height: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
    /// Ids whose deletion is in flight; their delete action is disabled.
    pub deleting: &'a [u64],
}

/// The rendered cards, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    /// Builds cards for `reviews`, one per review, in order.
    #[must_use]
    pub fn render(reviews: &[Review]) -> Self {
        Self {
            cards: reviews.iter().map(Card::from_review).collect(),
        }
    }

    /// Returns true when the placeholder is shown instead of cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns all cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the index of the card keyed by `id`.
    #[must_use]
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    /// Renders the visible cards as text.
    ///
    /// Unselected cards show a one-line preview of their content; the
    /// selected card shows it in full, wrapped to the width and clipped to
    /// the visible height.
    #[must_use]
    pub fn view(&self, ctx: &CardListViewContext<'_>) -> String {
        if self.cards.is_empty() {
            return format!("  {EMPTY_PLACEHOLDER}\n");
        }

        let body_width = body_width(ctx.max_width);
        let max_content_lines = ctx
            .visible_height
            .saturating_sub(CARD_HEIGHT - 1)
            .max(1);
        let mut expanded = self
            .cards
            .get(ctx.cursor_position)
            .map(|card| full_content(card, body_width, max_content_lines));
        let extra_lines = expanded
            .as_ref()
            .map_or(0, |lines| lines.len().saturating_sub(1));

        let cards_fit = ctx
            .visible_height
            .saturating_sub(extra_lines)
            .checked_div(CARD_HEIGHT)
            .unwrap_or(1)
            .max(1);
        let start = ctx
            .cursor_position
            .saturating_add(1)
            .saturating_sub(cards_fit);

        let mut output = String::new();
        for (index, card) in self.cards.iter().enumerate().skip(start).take(cards_fit) {
            let selected = index == ctx.cursor_position;
            let content = if selected {
                expanded.take().unwrap_or_default()
            } else {
                vec![first_line_preview(card.content(), body_width)]
            };
            let style = CardStyle {
                selected,
                deleting: ctx.deleting.contains(&card.id()),
            };
            output.push_str(&format_card(card, &content, style, body_width));
        }
        output
    }

    /// Renders every card with its full content and no cursor, for
    /// non-interactive output.
    #[must_use]
    pub fn plain_view(&self, max_width: usize) -> String {
        if self.cards.is_empty() {
            return format!("  {EMPTY_PLACEHOLDER}\n");
        }

        let body_width = body_width(max_width);
        self.cards
            .iter()
            .map(|card| {
                let content = full_content(card, body_width, usize::MAX);
                format_card(card, &content, CardStyle::default(), body_width)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CardStyle {
    selected: bool,
    deleting: bool,
}

const fn body_width(max_width: usize) -> usize {
    let width = max_width.saturating_sub(BODY_INDENT);
    if width == 0 { 1 } else { width }
}

/// Wraps the card content, ending with `...` when it exceeds `max_lines`.
fn full_content(card: &Card, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_lines(card.content(), width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = truncate_with_ellipsis(&format!("{last} ..."), width);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn format_card(card: &Card, content: &[String], style: CardStyle, body_width: usize) -> String {
    let prefix = if style.selected { ">" } else { " " };
    let heading = truncate_with_ellipsis(
        &format!("{} · ID: {}", card.title(), card.id()),
        body_width,
    );
    let delete_label = if style.deleting {
        "[d] Deletando..."
    } else {
        "[d] Deletar"
    };

    let mut output = format!("{prefix} {heading}\n");
    for line in content {
        output.push_str(&format!("    {line}\n"));
    }
    output.push_str(&format!(
        "    Postado em: {date}\n    [e] Editar  {delete_label}\n\n",
        date = card.date_label(),
    ));
    output
}
