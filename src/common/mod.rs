use core::fmt::{Debug, LowerHex};

pub mod macros;

#[repr(transparent)]
pub struct DebugHex<T: LowerHex>(T);

impl<T: LowerHex> DebugHex<T> {
    pub fn new(value: T) -> Self {
        DebugHex(value)
    }
}

impl<T: LowerHex + Clone> Clone for DebugHex<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: LowerHex + Copy> Copy for DebugHex<T> {}

impl<T: LowerHex> Debug for DebugHex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{:#04x}", self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::DebugHex;

    #[test]
    fn debug_hex_pads_bytes() {
        assert_eq!(format!("{:?}", DebugHex::new(0x9au8)), "0x9a");
        assert_eq!(format!("{:?}", DebugHex::new(0x1u8)), "0x01");
    }
}
