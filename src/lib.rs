pub mod cust_errors;
pub mod graph;
pub mod degeneracy;
pub mod ordering;
pub mod ilst;
pub mod cvc;
pub mod branch_bound;
pub mod bitmasking;

#[cfg(test)]
mod testing;
