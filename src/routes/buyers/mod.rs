//! Routes acting on behalf of the buyer named in `X-Buyer-Id`.

pub mod carts;
pub mod orders;
