#![cfg(test)]

mod util;
