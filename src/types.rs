// ABOUTME: Defines UTF-8 code unit classes and scalar value limits.
// ABOUTME: Byte ranges and masks map directly to the UTF-8 wire layout.

/// Code unit classification for UTF-8 byte sequences.
///
/// A sequence is one lead unit followed by zero or more continuation units;
/// the lead unit's range determines the sequence length.
pub mod code_unit {
    // Single-unit values: 0x00-0x7f
    pub const ASCII_MAX: u8 = 0x7f;

    // Continuation units: 0x80-0xbf
    pub const CONTINUATION_MIN: u8 = 0x80;
    pub const CONTINUATION_MAX: u8 = 0xbf;

    // Lead units by sequence length
    pub const LEAD_2_MIN: u8 = 0xc0;
    pub const LEAD_2_MAX: u8 = 0xdf;
    pub const LEAD_3_MIN: u8 = 0xe0;
    pub const LEAD_3_MAX: u8 = 0xef;
    pub const LEAD_4_MIN: u8 = 0xf0;
    pub const LEAD_4_MAX: u8 = 0xf7;

    // 0xf8-0xff never appear in well-formed UTF-8

    /// Payload masks for lead units, by sequence length.
    pub const LEAD_2_MASK: u8 = 0x1f;
    pub const LEAD_3_MASK: u8 = 0x0f;
    pub const LEAD_4_MASK: u8 = 0x07;

    /// Payload mask for continuation units.
    pub const CONTINUATION_MASK: u8 = 0x3f;

    /// Payload bits carried by each continuation unit.
    pub const CONTINUATION_BITS: u32 = 6;

    /// Check if a unit is a single-unit (ASCII) value.
    #[inline]
    pub const fn is_ascii(unit: u8) -> bool {
        unit <= ASCII_MAX
    }

    /// Check if a unit is a continuation unit.
    #[inline]
    pub const fn is_continuation(unit: u8) -> bool {
        unit >= CONTINUATION_MIN && unit <= CONTINUATION_MAX
    }

    /// Total sequence length implied by a lead unit, or `None` for a unit
    /// that can never appear in lead position (a continuation unit, or
    /// 0xf8-0xff).
    #[inline]
    pub const fn sequence_len(lead: u8) -> Option<usize> {
        match lead {
            0x00..=ASCII_MAX => Some(1),
            LEAD_2_MIN..=LEAD_2_MAX => Some(2),
            LEAD_3_MIN..=LEAD_3_MAX => Some(3),
            LEAD_4_MIN..=LEAD_4_MAX => Some(4),
            _ => None,
        }
    }

    /// Payload mask for a lead unit of the given sequence length.
    ///
    /// Only defined for multi-unit lengths (2-4).
    #[inline]
    pub const fn lead_mask(len: usize) -> u8 {
        match len {
            2 => LEAD_2_MASK,
            3 => LEAD_3_MASK,
            _ => LEAD_4_MASK,
        }
    }
}

/// Scalar value limits for decoded code points.
pub mod scalar {
    /// Smallest value that requires a 2-unit sequence.
    pub const MIN_FOR_2: u32 = 0x80;

    /// Smallest value that requires a 3-unit sequence.
    pub const MIN_FOR_3: u32 = 0x800;

    /// Smallest value that requires a 4-unit sequence.
    pub const MIN_FOR_4: u32 = 0x1_0000;

    /// Largest encodable scalar value.
    pub const MAX: u32 = 0x10_ffff;

    /// Low bound of the surrogate range check (exclusive).
    pub const SURROGATE_LOW: u32 = 0xd800;

    /// High bound of the surrogate range check (exclusive).
    pub const SURROGATE_END: u32 = 0xe000;

    /// Smallest value a sequence of the given length may encode.
    ///
    /// Anything below it is an overlong encoding. Only defined for
    /// multi-unit lengths (2-4).
    #[inline]
    pub const fn min_for_len(len: usize) -> u32 {
        match len {
            2 => MIN_FOR_2,
            3 => MIN_FOR_3,
            _ => MIN_FOR_4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_len_ranges() {
        assert_eq!(code_unit::sequence_len(0x00), Some(1));
        assert_eq!(code_unit::sequence_len(0x7f), Some(1));
        assert_eq!(code_unit::sequence_len(0x80), None);
        assert_eq!(code_unit::sequence_len(0xbf), None);
        assert_eq!(code_unit::sequence_len(0xc0), Some(2));
        assert_eq!(code_unit::sequence_len(0xdf), Some(2));
        assert_eq!(code_unit::sequence_len(0xe0), Some(3));
        assert_eq!(code_unit::sequence_len(0xef), Some(3));
        assert_eq!(code_unit::sequence_len(0xf0), Some(4));
        assert_eq!(code_unit::sequence_len(0xf7), Some(4));
        assert_eq!(code_unit::sequence_len(0xf8), None);
        assert_eq!(code_unit::sequence_len(0xff), None);
    }

    #[test]
    fn test_continuation_range() {
        assert!(!code_unit::is_continuation(0x7f));
        assert!(code_unit::is_continuation(0x80));
        assert!(code_unit::is_continuation(0xbf));
        assert!(!code_unit::is_continuation(0xc0));
    }

    #[test]
    fn test_masks_cover_payload_bits() {
        // 2-unit: 5 + 6 bits reach 0x7ff
        let max2 = (u32::from(code_unit::LEAD_2_MASK) << 6) | 0x3f;
        assert_eq!(max2, 0x7ff);
        // 3-unit: 4 + 6 + 6 bits reach 0xffff
        let max3 = (u32::from(code_unit::LEAD_3_MASK) << 12) | 0xfff;
        assert_eq!(max3, 0xffff);
        // 4-unit: 3 + 6 + 6 + 6 bits reach 0x1fffff
        let max4 = (u32::from(code_unit::LEAD_4_MASK) << 18) | 0x3_ffff;
        assert_eq!(max4, 0x1f_ffff);
        assert!(max4 > scalar::MAX);
    }

    #[test]
    fn test_min_for_len() {
        assert_eq!(scalar::min_for_len(2), 0x80);
        assert_eq!(scalar::min_for_len(3), 0x800);
        assert_eq!(scalar::min_for_len(4), 0x1_0000);
    }
}
