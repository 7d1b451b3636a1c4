#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

#[cfg(feature = "chrono")]
use chrono::{DateTime, Local, Utc};
#[cfg(feature = "colored")]
use colored::{Color, Colorize};
use std::fmt::{self, Write};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub head: bool,
    pub position: bool,
    #[cfg(feature = "chrono")]
    pub timestamps: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            head: true,
            position: true,
            #[cfg(feature = "chrono")]
            timestamps: true,
        }
    }
}

impl Format {
    pub fn title(self, f: &mut fmt::Formatter, title: &str) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return writeln!(f, "{}", title.bold());
        }
        writeln!(f, "{title}")
    }

    pub fn mark(self, f: &mut fmt::Formatter, level: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", "*".color(color_of_level(level)));
        }
        f.write_str("* ")
    }

    pub fn edge(self, f: &mut fmt::Formatter, level: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", "|".color(color_of_level(level)));
        }
        f.write_str("| ")
    }

    pub fn position(self, f: &mut fmt::Formatter, position: usize) -> fmt::Result {
        if !self.position {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", position.to_string().yellow().bold());
        }
        write!(f, "{position} ")
    }

    pub fn head(self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.head {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(
                f,
                "{}{}{} ",
                "[".yellow(),
                "HEAD".cyan().bold(),
                "]".yellow()
            );
        }
        f.write_str("[HEAD] ")
    }

    #[cfg(feature = "chrono")]
    pub fn timestamp(self, f: &mut fmt::Formatter, timestamp: &DateTime<Utc>) -> fmt::Result {
        if !self.timestamps {
            return Ok(());
        }
        let rfc2822 = timestamp.with_timezone(&Local).to_rfc2822();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", rfc2822.yellow());
        }
        write!(f, "[{rfc2822}] ")
    }

    pub fn text(self, f: &mut fmt::Formatter, text: &str, level: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return writeln!(f, "{}", text.color(color_of_level(level)));
        }
        f.write_str(text)?;
        f.write_char('\n')
    }
}

#[cfg(feature = "colored")]
fn color_of_level(level: usize) -> Color {
    match level % 6 {
        0 => Color::Cyan,
        1 => Color::Red,
        2 => Color::Magenta,
        3 => Color::Yellow,
        4 => Color::Green,
        5 => Color::Blue,
        _ => unreachable!(),
    }
}
