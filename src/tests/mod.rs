mod cursor;

#[cfg(feature = "alloc")]
mod alloc;
