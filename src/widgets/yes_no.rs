//! Cellgrid YesNo - inline `[Y/n]` prompt at the cursor

use crate::error::Result;
use crate::input::Key;
use crate::screen::Screen;

pub struct YesNo;

impl YesNo {
    /// Prompt text; the capital letter marks the default
    pub fn prompt(message: &str, default: Option<bool>) -> String {
        let choices = match default {
            Some(true) => "[Y/n]",
            Some(false) => "[y/N]",
            None => "[Y/N]",
        };
        format!("{} {} ", message, choices)
    }

    /// Write the prompt at the cursor and wait for `y` or `n`.
    ///
    /// Enter picks the default when there is one. Every other key is
    /// ignored. The answer is echoed after the prompt.
    pub fn ask(screen: &mut dyn Screen, message: &str, default: Option<bool>) -> Result<bool> {
        screen.write_str(&Self::prompt(message, default))?;
        screen.flush()?;

        loop {
            let answer = match screen.read_key()? {
                Key::Char(c) if c.eq_ignore_ascii_case(&'y') => true,
                Key::Char(c) if c.eq_ignore_ascii_case(&'n') => false,
                Key::Enter => match default {
                    Some(answer) => answer,
                    None => continue,
                },
                _ => continue,
            };
            screen.write_str(if answer { "y" } else { "n" })?;
            screen.flush()?;
            return Ok(answer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::screen::MemoryScreen;

    #[test]
    fn test_prompt_marks_default() {
        assert_eq!(YesNo::prompt("Go?", Some(true)), "Go? [Y/n] ");
        assert_eq!(YesNo::prompt("Go?", Some(false)), "Go? [y/N] ");
        assert_eq!(YesNo::prompt("Go?", None), "Go? [Y/N] ");
    }

    #[test]
    fn test_case_insensitive_answer() {
        let mut screen = MemoryScreen::with_keys(30, 2, [Key::Char('x'), Key::Char('N')]);
        assert!(!YesNo::ask(&mut screen, "Go?", Some(true)).unwrap());
        assert_eq!(screen.text_at(0, 0, 11), "Go? [Y/n] n");
    }

    #[test]
    fn test_enter_takes_default() {
        let mut screen = MemoryScreen::with_keys(30, 2, [Key::Enter]);
        assert!(!YesNo::ask(&mut screen, "Go?", Some(false)).unwrap());
    }

    #[test]
    fn test_enter_without_default_is_ignored() {
        let mut screen = MemoryScreen::with_keys(30, 2, [Key::Enter, Key::Char('y')]);
        assert!(YesNo::ask(&mut screen, "Go?", None).unwrap());

        let mut screen = MemoryScreen::with_keys(30, 2, [Key::Enter]);
        assert!(matches!(YesNo::ask(&mut screen, "Go?", None), Err(Error::InputClosed)));
    }
}
