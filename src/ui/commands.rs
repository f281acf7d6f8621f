// Text commands for driving the gallery without a display
//
// Commands (one per line, `#` starts a comment):
// - tap <id> / long <id>: grid tap and long-press
// - double <x> <y>: double-tap inside the viewer
// - pinch <pan_x> <pan_y> <centroid_x> <centroid_y> <zoom>: one transform step
// - drag <dx> <dy>: pan-only transform step
// - resize <width> <height>: viewport layout change
// - back / escape / dismiss: close the viewer
// - clear: cancel multi-select

use std::str::FromStr;

use crate::app::GalleryEvent;
use crate::error::{GalleryError, Result};
use crate::models::{Vector2, ViewportSize};

/// Parse one input line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<GalleryEvent>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let event = match command.to_ascii_lowercase().as_str() {
        "tap" => {
            let [id] = expect_args(command, &args)?;
            GalleryEvent::Tap(number(id)?)
        }
        "long" => {
            let [id] = expect_args(command, &args)?;
            GalleryEvent::LongPress(number(id)?)
        }
        "double" => {
            let [x, y] = expect_args(command, &args)?;
            GalleryEvent::DoubleTap(Vector2::new(number(x)?, number(y)?))
        }
        "pinch" => {
            let [pan_x, pan_y, cx, cy, zoom] = expect_args(command, &args)?;
            GalleryEvent::Transform {
                pan: Vector2::new(number(pan_x)?, number(pan_y)?),
                centroid: Vector2::new(number(cx)?, number(cy)?),
                zoom: number(zoom)?,
            }
        }
        "drag" => {
            let [dx, dy] = expect_args(command, &args)?;
            GalleryEvent::Transform {
                pan: Vector2::new(number(dx)?, number(dy)?),
                centroid: Vector2::ZERO,
                zoom: 1.0,
            }
        }
        "resize" => {
            let [w, h] = expect_args(command, &args)?;
            GalleryEvent::Resize(ViewportSize::new(number(w)?, number(h)?))
        }
        "back" | "escape" | "dismiss" => {
            let [] = expect_args(command, &args)?;
            GalleryEvent::Dismiss
        }
        "clear" => {
            let [] = expect_args(command, &args)?;
            GalleryEvent::ClearSelection
        }
        other => {
            return Err(GalleryError::InvalidCommand(format!(
                "unknown command `{other}`"
            )))
        }
    };
    Ok(Some(event))
}

fn expect_args<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        GalleryError::InvalidCommand(format!(
            "`{command}` takes {N} argument(s), got {}",
            args.len()
        ))
    })
}

fn number<T: FromStr>(word: &str) -> Result<T> {
    word.parse()
        .map_err(|_| GalleryError::InvalidCommand(format!("not a number: `{word}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid_commands() {
        assert_eq!(parse_line("tap 7").unwrap(), Some(GalleryEvent::Tap(7)));
        assert_eq!(
            parse_line("  LONG 3  ").unwrap(),
            Some(GalleryEvent::LongPress(3))
        );
        assert_eq!(parse_line("clear").unwrap(), Some(GalleryEvent::ClearSelection));
    }

    #[test]
    fn test_parse_viewer_commands() {
        assert_eq!(
            parse_line("double 10 20.5").unwrap(),
            Some(GalleryEvent::DoubleTap(Vector2::new(10.0, 20.5)))
        );
        assert_eq!(
            parse_line("pinch 1 2 300 400 1.5").unwrap(),
            Some(GalleryEvent::Transform {
                pan: Vector2::new(1.0, 2.0),
                centroid: Vector2::new(300.0, 400.0),
                zoom: 1.5,
            })
        );
        assert_eq!(
            parse_line("drag -5 8").unwrap(),
            Some(GalleryEvent::Transform {
                pan: Vector2::new(-5.0, 8.0),
                centroid: Vector2::ZERO,
                zoom: 1.0,
            })
        );
        assert_eq!(
            parse_line("resize 1080 1920").unwrap(),
            Some(GalleryEvent::Resize(ViewportSize::new(1080.0, 1920.0)))
        );
        for word in ["back", "escape", "dismiss"] {
            assert_eq!(parse_line(word).unwrap(), Some(GalleryEvent::Dismiss));
        }
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # open the first photo").unwrap(), None);
        assert_eq!(parse_line("tap 1 # first").unwrap(), Some(GalleryEvent::Tap(1)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_line("zoom 2"),
            Err(GalleryError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_line("tap"),
            Err(GalleryError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_line("tap seven"),
            Err(GalleryError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_line("back now"),
            Err(GalleryError::InvalidCommand(_))
        ));
    }
}
