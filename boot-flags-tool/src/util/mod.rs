use std::num::ParseIntError;

/// Parse a 32-bit word, hexadecimal when prefixed with `0x`, decimal otherwise.
pub fn parse_u32(s: &str) -> Result<u32, ParseIntError> {
    let s = s.trim().replace('_', "");
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    }
}
