//! Convenience bitwise operations over register words.

/// A contiguous group of bits inside a 32 bit register word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitField {
    shift: u32,
    mask: u32,
}

impl BitField {
    /// Field `width` bits wide starting at bit `shift`. Returns `None`
    /// if the field doesn't fit inside a word.
    pub fn new(shift: u32, width: u32) -> Option<Self> {
        if width == 0 || width > u32::BITS || shift > u32::BITS - width {
            return None;
        }
        Some(Self { shift, mask: (u32::MAX >> (u32::BITS - width)) << shift })
    }

    pub fn shift(&self) -> u32 { self.shift }

    /// Mask with every bit of the field set.
    pub fn mask(&self) -> u32 { self.mask }

    /// Reads the field out of `word`, right aligned.
    pub fn extract(&self, word: u32) -> u32 { (word & self.mask) >> self.shift }

    /// Returns `word` with the field cleared.
    pub fn clear(&self, word: u32) -> u32 { word & !self.mask }

    /// Returns `word` with the field replaced by `value`. Bits of `value`
    /// that fall outside the field are discarded.
    pub fn insert(&self, word: u32, value: u32) -> u32 {
        self.clear(word) | ((value << self.shift) & self.mask)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fields_must_fit_in_a_word() {
        assert!(BitField::new(0, 3).is_some());
        assert!(BitField::new(29, 3).is_some());
        assert!(BitField::new(30, 3).is_none());
        assert!(BitField::new(0, 0).is_none());
        assert!(BitField::new(0, 32).is_some());
        assert!(BitField::new(1, 32).is_none());
    }

    #[test]
    fn masks_cover_exactly_the_field() {
        assert_eq!(BitField::new(0, 3).unwrap().mask(), 0b111);
        assert_eq!(BitField::new(3, 3).unwrap().mask(), 0b111_000);
        assert_eq!(BitField::new(3, 3).unwrap().shift(), 3);
        assert_eq!(BitField::new(0, 32).unwrap().mask(), 0xFFFF_FFFF);
    }

    #[test]
    fn inserting_preserves_neighbouring_bits() {
        // Given
        let field = BitField::new(3, 3).unwrap();
        let word = 0b101_010_101;

        // When
        let word = field.insert(word, 0b111);

        // Then
        assert_eq!(word, 0b101_111_101);
        assert_eq!(field.extract(word), 0b111);
        assert_eq!(field.clear(word), 0b101_000_101);
    }

    #[test]
    fn oversized_values_are_truncated_to_the_field() {
        let field = BitField::new(0, 3).unwrap();
        assert_eq!(field.insert(0, 0b1010), 0b010);
    }
}
