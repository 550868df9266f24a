//! mandex: a lazy index over a sectioned manual corpus.
//!
//! A corpus is a directory holding `man1` through `man8`, each containing pages and nested
//! subsections. mandex discovers the tree on demand, resolves `man`-style queries and
//! `help://man/...` locators to pages, and searches page names and bodies.

#![warn(missing_docs)]

pub mod cli;
