//! This crate is my attempt at writing some of the primitives a standard library is built from.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. Writing these types myself helps me to understand what the
//! built-in ones are actually doing, and every module is tested against its built-in counterpart:
//! [`Vector`](collections::contiguous::Vector) against [`Vec`], [`BitVector`](collections::bits::BitVector)
//! against `Vec<bool>`, the [`variant!`] macro against plain enums and
//! [`Unique`](pointer::Unique) against [`Box`].
//!
//! # Method
//! All data structures here are written based on my existing understanding and problem solving. I'm
//! not following any guides or copying from the standard library but neither am I restricting my
//! self from looking things up or referring to existing crates, especially their APIs.
//!
//! Allocation is done manually through [`std::alloc`], wrapped in
//! [`Array`](collections::contiguous::Array) so that memory is always released by a [`Drop`]
//! implementation. Everything that grows does so by doubling, rounding to the next power of two.
//!
//! # Error Handling
//! Specifically for a standard library, it is more ergonomic for functions to panic in some cases,
//! because users don't want to be forced to handle an error every time they invoke a method. For
//! example, imagine having to handle the possibility of a capacity overflow every time you push into
//! a Vector. So capacity overflows panic, while lookups that can reasonably miss, like
//! [`at`](collections::contiguous::Vector::at) or [`Variant::get`](variant::Variant::get), return
//! [`Result`]s.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming, and on `tracing` so that allocations can be traced when a
//! subscriber is installed. Nothing is logged unless the consumer asks for it.
//!
//! # Features
//! Every module sits behind a cargo feature, all enabled by default: `contiguous` and `bits` (both
//! under `collections-all`), `variant`, `pointer` and `reflect`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "pointer")]
pub mod pointer;
#[cfg(feature = "reflect")]
pub mod reflect;
#[cfg(feature = "variant")]
pub mod variant;

pub(crate) mod util;
