pub mod block_codec;
pub mod circle;
pub mod dct;
pub mod lsb_codec;
pub mod positions;

pub use block_codec::BlockCodec;
pub use circle::CircleDirection;
pub use lsb_codec::LsbCodec;
