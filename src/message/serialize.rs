//! Wire rendering for [`Message`].

use std::fmt::{self, Write as _};

use super::Message;

impl Message {
    /// Render the message as one protocol line, without the CRLF delimiter.
    ///
    /// Arguments are joined with single spaces. The last argument gets a `:`
    /// marker when it contains a space, is empty, or starts with `:` itself.
    /// Normalized numerics are written back as their original digits.
    ///
    /// ```
    /// use slirc_client::Message;
    ///
    /// let msg = Message::new("PONG", ["abc123"]).unwrap();
    /// assert_eq!(msg.render(), "PONG abc123");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.render_len());
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn render_len(&self) -> usize {
        self.prefix.as_ref().map_or(0, |p| p.len() + 2)
            + self.wire_command().len()
            + self.args.iter().map(|a| a.len() + 2).sum::<usize>()
    }

    fn wire_command(&self) -> &str {
        self.numeric.as_deref().unwrap_or(&self.command)
    }

    fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            out.write_char(':')?;
            out.write_str(prefix)?;
            out.write_char(' ')?;
        }
        out.write_str(self.wire_command())?;

        if let Some((last, middles)) = self.args.split_last() {
            for arg in middles {
                out.write_char(' ')?;
                out.write_str(arg)?;
            }
            out.write_char(' ')?;
            if needs_trailing_marker(last) {
                out.write_char(':')?;
            }
            out.write_str(last)?;
        }

        Ok(())
    }
}

fn needs_trailing_marker(arg: &str) -> bool {
    arg.is_empty() || arg.starts_with(':') || arg.contains(' ')
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
