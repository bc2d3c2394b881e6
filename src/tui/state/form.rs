//! Form-mode state machine for creating and editing reviews.
//!
//! The form is either in [`FormMode::Create`] (initial) or
//! [`FormMode::Edit`] for one review id. Whenever the mode is `Edit(id)`, the
//! field buffers hold the title and content that were loaded from review
//! `id`; [`FormState::reset`] is the only way back to `Create` and always
//! clears the buffers.

use crate::api::{Review, ReviewDraft};

/// Heading shown while creating a review.
pub const CREATE_LABEL: &str = "Postar um Novo Review";

/// Heading shown while editing a review.
pub const EDIT_LABEL: &str = "Editando Review";

/// Whether the form targets a new or an existing review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submitting creates a new review.
    #[default]
    Create,
    /// Submitting updates the review with this id.
    Edit(u64),
}

impl FormMode {
    /// Returns the id being edited, if any.
    #[must_use]
    pub const fn editing_id(self) -> Option<u64> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    /// Returns the form heading for this mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => CREATE_LABEL,
            Self::Edit(_) => EDIT_LABEL,
        }
    }
}

/// Editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Review title.
    #[default]
    Title,
    /// Review body text.
    Content,
}

/// Request produced by submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Create a new review.
    Create(ReviewDraft),
    /// Update an existing review.
    Update {
        /// Review being edited.
        id: u64,
        /// New title and content.
        draft: ReviewDraft,
    },
}

/// Form mode plus the field buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
    title: String,
    content: String,
    active_field: FormField,
}

impl FormState {
    /// Creates an empty form in create mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns the id being edited, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<u64> {
        self.mode.editing_id()
    }

    /// Returns the title buffer.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the content buffer.
    #[must_use]
    pub const fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Returns the field receiving typed characters.
    #[must_use]
    pub const fn active_field(&self) -> FormField {
        self.active_field
    }

    /// Returns the form heading.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.mode.label()
    }

    /// Returns true when the "cancel edit" affordance is visible.
    #[must_use]
    pub const fn shows_cancel(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Loads `review` into the form and switches to `Edit(review.id)`.
    ///
    /// Any unsaved text is replaced, whatever the previous mode was.
    pub fn begin_edit(&mut self, review: &Review) {
        self.mode = FormMode::Edit(review.id);
        self.title.clone_from(&review.title);
        self.content.clone_from(&review.content);
        self.active_field = FormField::Title;
    }

    /// Clears the form and returns to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Appends a character to the active field.
    pub fn push_char(&mut self, character: char) {
        self.active_buffer_mut().push(character);
    }

    /// Removes the last character of the active field.
    pub fn backspace(&mut self) {
        self.active_buffer_mut().pop();
    }

    /// Moves input to the other field.
    pub const fn toggle_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Title,
        };
    }

    /// Returns true when both fields have non-whitespace text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Returns the request a submission would issue in the current mode.
    #[must_use]
    pub fn submission(&self) -> Submission {
        let draft = ReviewDraft::new(self.title.clone(), self.content.clone());
        match self.mode {
            FormMode::Create => Submission::Create(draft),
            FormMode::Edit(id) => Submission::Update { id, draft },
        }
    }

    const fn active_buffer_mut(&mut self) -> &mut String {
        match self.active_field {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{CREATE_LABEL, EDIT_LABEL, FormField, FormMode, FormState, Submission};
    use crate::api::{Review, ReviewDraft};

    #[fixture]
    fn review() -> Review {
        Review {
            id: 5,
            title: "Pico da Neblina".to_owned(),
            content: "Subida longa".to_owned(),
            date_posted: "2024-03-05T14:30:00".to_owned(),
        }
    }

    #[test]
    fn starts_in_create_mode() {
        let form = FormState::new();

        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.label(), CREATE_LABEL);
        assert!(!form.shows_cancel());
    }

    #[rstest]
    fn begin_edit_loads_review(review: Review) {
        let mut form = FormState::new();
        form.push_char('x');

        form.begin_edit(&review);

        assert_eq!(form.mode(), FormMode::Edit(5));
        assert_eq!(form.title(), "Pico da Neblina");
        assert_eq!(form.content(), "Subida longa");
        assert_eq!(form.label(), EDIT_LABEL);
        assert!(form.shows_cancel());
    }

    #[rstest]
    fn begin_edit_switches_between_reviews(review: Review) {
        let mut form = FormState::new();
        form.begin_edit(&review);
        let other = Review {
            id: 9,
            title: "Outro".to_owned(),
            ..review
        };

        form.begin_edit(&other);

        assert_eq!(form.editing_id(), Some(9));
        assert_eq!(form.title(), "Outro");
    }

    #[rstest]
    fn reset_returns_to_clean_create_mode(review: Review) {
        let mut form = FormState::new();
        form.begin_edit(&review);
        form.toggle_field();

        form.reset();

        assert_eq!(form, FormState::new());
        assert_eq!(form.editing_id(), None);
    }

    #[test]
    fn typing_goes_to_active_field() {
        let mut form = FormState::new();
        form.push_char('a');
        form.toggle_field();
        form.push_char('b');
        form.push_char('c');
        form.backspace();

        assert_eq!(form.title(), "a");
        assert_eq!(form.content(), "b");
        assert_eq!(form.active_field(), FormField::Content);
    }

    #[rstest]
    fn submission_follows_mode(review: Review) {
        let mut form = FormState::new();
        form.push_char('t');
        assert_eq!(
            form.submission(),
            Submission::Create(ReviewDraft::new("t", ""))
        );

        form.begin_edit(&review);
        assert_eq!(
            form.submission(),
            Submission::Update {
                id: 5,
                draft: ReviewDraft::new("Pico da Neblina", "Subida longa"),
            }
        );
    }

    #[rstest]
    #[case("", "", false)]
    #[case("Título", "  ", false)]
    #[case("Título", "Texto", true)]
    fn completeness_requires_both_fields(
        #[case] title: &str,
        #[case] content: &str,
        #[case] expected: bool,
    ) {
        let mut form = FormState::new();
        title.chars().for_each(|c| form.push_char(c));
        form.toggle_field();
        content.chars().for_each(|c| form.push_char(c));

        assert_eq!(form.is_complete(), expected);
    }
}
