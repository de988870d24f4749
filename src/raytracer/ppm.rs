use std::io::Write;

use crate::raytracer::{Color, RenderResult, to_channel};

/// Plain-text (P3) PPM encoder writing pixels as they come, without buffering
/// the whole image.
pub struct PpmWriter<W: Write> {
    out: W,
}

impl<W: Write> PpmWriter<W> {
    pub const MAX_CHANNEL_VALUE: u8 = 255;

    /// Write the three header lines and return a writer ready for pixels.
    pub fn new(mut out: W, width: usize, height: usize) -> RenderResult<Self> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", width, height)?;
        writeln!(out, "{}", Self::MAX_CHANNEL_VALUE)?;
        Ok(Self { out })
    }

    pub fn write_color(&mut self, color: Color) -> RenderResult<()> {
        writeln!(
            self.out,
            "{} {} {}",
            to_channel(color.x),
            to_channel(color.y),
            to_channel(color.z)
        )?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> RenderResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
