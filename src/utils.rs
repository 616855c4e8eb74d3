pub mod json;

#[cfg(test)]
pub mod test_util;
