pub mod errors;
pub mod db;
pub mod ad;

#[cfg(test)]
mod tests;
