pub mod export;
pub mod load;
pub mod testing;

#[cfg(feature = "proptest")]
pub mod proptest;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
