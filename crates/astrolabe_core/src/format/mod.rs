//! Date pattern language.
//!
//! # Responsibility
//! - Compile pattern strings into a token list once.
//! - Render dates from tokens and read dates back from text.
//!
//! # Tokens
//! A pattern is made of runs of one ASCII letter, quoted literals and any
//! other character (copied verbatim).
//!
//! | Token | Meaning |
//! |---|---|
//! | `y` | year, unpadded |
//! | `yy` | year modulo 100, two digits |
//! | `yyy`..`yyyyyyyyyy` | year padded to the run length (at most 10), `-` for negative years |
//! | `q`, `qq` | quarter number |
//! | `qqq`, `qqqq`, `qqqqq` | `Q1`, `1st quarter`, `1` |
//! | `M`, `MM` | month number |
//! | `MMM`, `MMMM`, `MMMMM` | `Jan`, `January`, `J` |
//! | `d`, `dd` | day of month |
//! | `D`, `DD`, `DDD` | day of year |
//! | `e`, `ee` | ISO weekday number, Monday = 1 |
//! | `E`..`EEE`, `EEEE`, `EEEEE` | `Mon`, `Monday`, `M` |
//! | `'text'` | literal text, `''` is one quote |
//!
//! # Invariants
//! - Unknown letters, over-long runs and unterminated quotes are
//!   `InvalidFormat` errors at compile time. Rendering never fails.

mod parse;
mod pattern;
mod render;

pub use pattern::Pattern;
