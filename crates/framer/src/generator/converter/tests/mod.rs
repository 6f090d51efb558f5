mod hashing;
mod support;
