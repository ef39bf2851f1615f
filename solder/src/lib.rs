//! # solder
//!
//! Convention-based service binding for dependency injection containers:
//! types declare a desired lifetime and the contracts they expose, and a
//! single bind pass discovers them, picks the contract each one is
//! registered under, and issues the registrations — replacing hand-written
//! registration code with a convention.
//!
//! ## Core Concepts
//!
//! - **TypeUniverse**: the statically assembled table of registrable types,
//!   built from per-type descriptors or per-module routines
//! - **Lifetime**: a closed tag (`Scoped`, `Singleton`, `Transient`)
//!   declaring how the container retains instances; untagged types are
//!   invisible to the binder
//! - **Contract**: an abstract interface an implementation is exposed as;
//!   the first declared contract wins, and a type with none self-registers
//! - **Binder**: drives one pass — scope the universe by project key,
//!   classify into lifetime buckets, resolve contracts, register
//! - **Registrar**: the container's registration boundary, one primitive
//!   per lifetime
//!
//! ## Basic Usage
//!
//! Assembling a universe by hand and binding it into a collection:
//!
//! ```rust
//! use solder::{
//!     BindOptions, Binder, ContractRef, Lifetime, ServiceCollection, TypeDescriptor,
//!     TypeUniverse,
//! };
//!
//! trait InvoiceStore {}
//!
//! struct PgInvoiceStore;
//!
//! impl InvoiceStore for PgInvoiceStore {}
//!
//! struct RequestContext;
//!
//! fn main() {
//!     let universe = TypeUniverse::builder()
//!         .add_descriptor(
//!             TypeDescriptor::named::<PgInvoiceStore>("acme::billing::PgInvoiceStore")
//!                 .with_lifetime(Lifetime::Singleton)
//!                 .with_contract(ContractRef::of::<dyn InvoiceStore>()),
//!         )
//!         .add_descriptor(
//!             // No contract: the type is resolved directly.
//!             TypeDescriptor::named::<RequestContext>("acme::web::RequestContext")
//!                 .with_lifetime(Lifetime::Scoped),
//!         )
//!         .build();
//!
//!     let mut services = ServiceCollection::new();
//!     let summary = Binder::new(BindOptions::new("acme"))
//!         .bind(&universe, &mut services)
//!         .unwrap();
//!
//!     assert_eq!(summary.total(), 2);
//!     assert!(services.iter().any(|r| r.is_self_registration()));
//! }
//! ```
//!
//! ## Using Macros
//!
//! With the `macros` feature enabled, types describe themselves:
//!
//! ```rust
//! mod app {
//!     use solder::Injectable;
//!
//!     pub trait Greeter {}
//!
//!     #[derive(Injectable)]
//!     #[injectable(transient, contracts(Greeter))]
//!     pub struct EnglishGreeter;
//!
//!     impl Greeter for EnglishGreeter {}
//! }
//!
//! use solder::{BindOptions, Binder, ServiceCollection, TypeUniverse};
//!
//! fn main() {
//!     let universe = TypeUniverse::builder().add::<app::EnglishGreeter>().build();
//!
//!     let mut services = ServiceCollection::new();
//!     let summary = Binder::new(BindOptions::new("app"))
//!         .bind(&universe, &mut services)
//!         .unwrap();
//!
//!     assert_eq!(summary.transient, 1);
//! }
//! ```
//!
//! ## Features
//!
//! - `macros` (default): Enables the `#[derive(Injectable)]` procedural macro

mod binder;
mod classify;
mod collection;
mod descriptor;
mod error;
mod registry;
mod resolve;

pub use binder::*;
pub use classify::*;
pub use collection::*;
pub use descriptor::*;
pub use error::*;
pub use registry::*;
pub use resolve::*;

#[cfg(feature = "macros")]
pub use solder_macros::*;
