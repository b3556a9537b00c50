// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Layout rendering.
//!
//! Two output shapes: a human-readable text listing (side header, one
//! `time - title` line per track, side total, blank line between sides) and
//! a CSV form with a `Side`/`Track` tag in the first field. Durations
//! render as `hh:mm:ss` unless plain seconds are requested.

use ballast_model::{catalog::Catalog, layout::Layout, time::format_hms};
use std::io::{self, Write};

/// Display options for a rendered layout.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Plain seconds instead of `hh:mm:ss`.
    pub plain: bool,
    /// CSV instead of the text listing.
    pub csv: bool,
    /// Field separator for CSV output.
    pub delimiter: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            plain: false,
            csv: false,
            delimiter: ',',
        }
    }
}

fn time_string(seconds: u64, plain: bool) -> String {
    if plain {
        seconds.to_string()
    } else {
        format_hms(seconds)
    }
}

/// Writes the layout to `out` in the configured format.
///
/// Track titles are looked up in the catalog the layout was built from.
pub fn render_layout<W: Write>(
    out: &mut W,
    catalog: &Catalog<u64>,
    layout: &Layout<u64>,
    options: &RenderOptions,
) -> io::Result<()> {
    for side in layout.iter() {
        let side_time = time_string(side.seconds(), options.plain);

        if options.csv {
            let d = options.delimiter;
            writeln!(
                out,
                "Side{d}{side_time}{d}\"{}, {} tracks\"",
                side.title(),
                side.len()
            )?;
            for track in side.iter() {
                let track_time = time_string(track.seconds, options.plain);
                let title = catalog.track(track.index).title();
                writeln!(out, "Track{d}{track_time}{d}\"{title}\"")?;
            }
        } else {
            writeln!(out, "{} - {} tracks", side.title(), side.len())?;
            for track in side.iter() {
                let track_time = time_string(track.seconds, options.plain);
                let title = catalog.track(track.index).title();
                writeln!(out, "{track_time} - {title}")?;
            }
            writeln!(out, "{side_time}")?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballast_model::catalog::CatalogBuilder;
    use ballast_model::catalog::Track;
    use ballast_model::index::SideIndex;

    fn fixture() -> (Catalog<u64>, Layout<u64>) {
        let mut builder = CatalogBuilder::new();
        builder.push(Track::new("Breathe", 163u64));
        builder.push(Track::new("Time", 413u64));
        builder.push(Track::new("Money", 382u64));
        let catalog = builder.build();

        let mut layout = Layout::with_sides(2);
        layout.push(SideIndex::new(0), catalog.track_ref(0.into()));
        layout.push(SideIndex::new(0), catalog.track_ref(1.into()));
        layout.push(SideIndex::new(1), catalog.track_ref(2.into()));
        (catalog, layout)
    }

    #[test]
    fn test_text_rendering() {
        let (catalog, layout) = fixture();
        let mut out = Vec::new();
        render_layout(&mut out, &catalog, &layout, &RenderOptions::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "\
Side 1 - 2 tracks
00:02:43 - Breathe
00:06:53 - Time
00:09:36

Side 2 - 1 tracks
00:06:22 - Money
00:06:22

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_plain_rendering_uses_raw_seconds() {
        let (catalog, layout) = fixture();
        let mut out = Vec::new();
        let options = RenderOptions {
            plain: true,
            ..RenderOptions::default()
        };
        render_layout(&mut out, &catalog, &layout, &options).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("163 - Breathe"));
        assert!(text.contains("576\n"));
    }

    #[test]
    fn test_csv_rendering() {
        let (catalog, layout) = fixture();
        let mut out = Vec::new();
        let options = RenderOptions {
            plain: false,
            csv: true,
            delimiter: ',',
        };
        render_layout(&mut out, &catalog, &layout, &options).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "\
Side,00:09:36,\"Side 1, 2 tracks\"
Track,00:02:43,\"Breathe\"
Track,00:06:53,\"Time\"
Side,00:06:22,\"Side 2, 1 tracks\"
Track,00:06:22,\"Money\"
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_csv_rendering_with_custom_delimiter() {
        let (catalog, layout) = fixture();
        let mut out = Vec::new();
        let options = RenderOptions {
            plain: true,
            csv: true,
            delimiter: ';',
        };
        render_layout(&mut out, &catalog, &layout, &options).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Side;576;\"Side 1, 2 tracks\""));
    }
}
