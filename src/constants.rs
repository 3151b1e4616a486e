/// Header slot holding the path count in a packed path buffer.
pub const PACKED_HEADER_OFFSET: usize = 1;
