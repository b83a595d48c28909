//! Share text for a finished (or in-progress) game
//!
//! The text is handed to whatever share or clipboard facility the front end
//! has; nothing here touches the clipboard.

use super::{Session, SessionContext};
use crate::config::ShareLabels;

/// Emoji rows for every submitted row, one string per row
#[must_use]
pub fn emoji_rows(context: &SessionContext, session: &Session) -> Vec<String> {
    (0..session.completed_rows())
        .map(|row| {
            (0..session.grid().width())
                .filter_map(|col| session.feedback(context.secret(), row, col).emoji())
                .collect()
        })
        .collect()
}

/// Format the share text
///
/// `"<title> <day> <tries>/<max> \n<rows>\n\n<tagline>"`, where `<tries>` is
/// the number of submitted rows: the winning row for a won game, every row
/// for a lost one.
///
/// # Examples
/// ```
/// use progle::calendar::DayKey;
/// use progle::config::ShareLabels;
/// use progle::core::SecretWord;
/// use progle::game::{Key, Session, SessionContext, share_text};
///
/// let context = SessionContext::new(DayKey::new(2026, 42), SecretWord::new("hi").unwrap(), 6);
/// let mut session = Session::new(6, 2);
/// for key in [Key::Letter('h'), Key::Letter('i'), Key::Enter] {
///     session.press(key, context.secret()).apply(&mut session);
/// }
///
/// let text = share_text(&context, &session, &ShareLabels::default());
/// assert_eq!(text, "Progle 42 1/6 \n🧑\u{200d}💻🧑\u{200d}💻\n\n#Progle");
/// ```
#[must_use]
pub fn share_text(context: &SessionContext, session: &Session, labels: &ShareLabels) -> String {
    format!(
        "{} {} {}/{} \n{}\n\n{}",
        labels.title,
        context.day().ordinal(),
        session.completed_rows(),
        context.tries(),
        emoji_rows(context, session).join("\n"),
        labels.tagline
    )
}
