use std::fmt;

use crate::error::{Error, Result};
use crate::{Square, doubly_even, lux, siamese};

/// Largest supported order: `n²` must fit in a `u32` cell.
pub const MAX_ORDER: usize = u16::MAX as usize;

/// Construction method, determined by the parity class of the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Odd orders: diagonal stepping on a torus.
    Siamese,
    /// Orders divisible by 4: sequential fill with complemented subgrid diagonals.
    DoublyEven,
    /// Orders `4k + 2`: Conway's LUX blocks over a Siamese square of half size.
    Lux,
}

impl Method {
    /// Selects the method for order `n`.
    ///
    /// Returns `None` for orders with no magic square (0 and 2).
    pub fn for_order(n: usize) -> Option<Self> {
        match n {
            0 | 2 => None,
            n if n % 2 == 1 => Some(Method::Siamese),
            n if n % 4 == 0 => Some(Method::DoublyEven),
            _ => Some(Method::Lux),
        }
    }

    /// Builds the square of order `n` with this method.
    ///
    /// # Panics
    /// Panics if `n` is not an order this method handles, i.e. if
    /// `Method::for_order(n) != Some(self)`.
    pub fn construct(self, n: usize) -> Square {
        match self {
            Method::Siamese => siamese::build(n),
            Method::DoublyEven => doubly_even::build(n),
            Method::Lux => lux::build(n),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Siamese => "Siamese",
            Method::DoublyEven => "doubly even",
            Method::Lux => "LUX",
        };
        f.write_str(name)
    }
}

/// Generates a magic square of order `n`.
///
/// The output is deterministic: the same `n` always yields the same square.
///
/// # Errors
/// - [`Error::InvalidOrder`] if `n < 1`
/// - [`Error::UnsupportedOrder`] if `n == 2`
/// - [`Error::OrderTooLarge`] if `n > MAX_ORDER`
pub fn generate(n: i64) -> Result<Square> {
    if n < 1 {
        return Err(Error::InvalidOrder(n));
    }
    let order = usize::try_from(n)
        .ok()
        .filter(|&order| order <= MAX_ORDER)
        .ok_or(Error::OrderTooLarge(n))?;
    let method = Method::for_order(order).ok_or(Error::UnsupportedOrder(order))?;

    log::debug!("generating magic square of order {order} with the {method} method");
    Ok(method.construct(order))
}
