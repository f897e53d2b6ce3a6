//! ASCII STL text output
//!
//! ```text
//! solid <name>
//! facet normal <nx> <ny> <nz>
//!   outer loop
//!     vertex <x> <y> <z>
//!     vertex <x> <y> <z>
//!     vertex <x> <y> <z>
//!   endloop
//! endfacet
//! endsolid <name>
//! ```

use crate::{Result, Triangle};
use nalgebra::Vector3;
use std::io::Write;

/// How float components are rendered
///
/// Components are widened to `f64` before formatting, so `0.1f32` is printed as
/// `0.10000000149011612`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest `f64` digits; fixed notation for `1e-4 <= |x| < 1e16`, otherwise
    /// `d.ddde+XX`. Integral values keep `.0`.
    #[default]
    Natural,
    /// Fixed number of decimal places
    Fixed(usize),
}

impl NumberFormat {
    pub fn format(self, value: f32) -> String {
        let value = f64::from(value);
        match self {
            NumberFormat::Fixed(precision) if value.is_finite() => {
                format!("{:.*}", precision, value)
            }
            _ => natural_text(value),
        }
    }
}

/// Largest decimal exponent still printed in fixed notation
const FIXED_MAX_DECPT: i32 = 16;
/// Smallest decimal exponent still printed in fixed notation
const FIXED_MIN_DECPT: i32 = -3;

fn natural_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{}0.0", sign);
    }

    // `{:e}` gives the shortest round-trip digits, e.g. `1.0000000149011612e-1`
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    // value = 0.DIGITS * 10^decpt
    let decpt = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if (1..=FIXED_MAX_DECPT).contains(&decpt) {
        let point = decpt as usize;
        if digits.len() <= point {
            format!("{}{}.0", digits, "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    } else if (FIXED_MIN_DECPT..=0).contains(&decpt) {
        format!("0.{}{}", "0".repeat(decpt.unsigned_abs() as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exp = decpt - 1;
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{}.{}e{}{:02}", lead, rest, exp_sign, exp.unsigned_abs())
    };

    format!("{}{}", sign, body)
}

/// Emits ASCII STL to an append-only sink.
///
/// Callers pair every `begin_*` with its `end_*`; nothing is buffered here, bytes
/// reach the sink in call order.
pub struct AsciiStlWriter<W> {
    out: W,
    number_format: NumberFormat,
}

impl<W: Write> AsciiStlWriter<W> {
    pub fn new(out: W) -> Self {
        Self::with_number_format(out, NumberFormat::default())
    }

    pub fn with_number_format(out: W, number_format: NumberFormat) -> Self {
        Self { out, number_format }
    }

    pub fn begin_mesh(&mut self, name: &str) -> Result<()> {
        writeln!(self.out, "solid {}", name)?;
        Ok(())
    }

    pub fn end_mesh(&mut self, name: &str) -> Result<()> {
        writeln!(self.out, "endsolid {}", name)?;
        Ok(())
    }

    /// Open a facet; the normal is part of the opening line.
    pub fn begin_facet(&mut self, normal: &Vector3<f32>) -> Result<()> {
        let normal = self.components(normal);
        writeln!(self.out, "facet normal {}", normal)?;
        Ok(())
    }

    pub fn begin_loop(&mut self) -> Result<()> {
        self.out.write_all(b"  outer loop\n")?;
        Ok(())
    }

    pub fn write_vertex(&mut self, vertex: &Vector3<f32>) -> Result<()> {
        let vertex = self.components(vertex);
        writeln!(self.out, "    vertex {}", vertex)?;
        Ok(())
    }

    pub fn end_loop(&mut self) -> Result<()> {
        self.out.write_all(b"  endloop\n")?;
        Ok(())
    }

    pub fn end_facet(&mut self) -> Result<()> {
        self.out.write_all(b"endfacet\n")?;
        Ok(())
    }

    /// Write one complete facet block in decode order
    pub fn write_facet(&mut self, triangle: &Triangle) -> Result<()> {
        self.begin_facet(&triangle.normal)?;
        self.begin_loop()?;
        for vertex in &triangle.vertices {
            self.write_vertex(vertex)?;
        }
        self.end_loop()?;
        self.end_facet()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn components(&self, v: &Vector3<f32>) -> String {
        let fmt = self.number_format;
        format!("{} {} {}", fmt.format(v.x), fmt.format(v.y), fmt.format(v.z))
    }
}
