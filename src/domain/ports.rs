use crate::utils::error::Result;

/// Line-oriented terminal the session talks through.
pub trait SessionIo {
    /// Shows `prompt` and blocks for one line of input. `Ok(None)` means the
    /// input stream is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<T: SessionIo + ?Sized> SessionIo for &mut T {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}
