//! Route table generator - Builds a route dispatch module from a directory of handler files.
//!
//! Every file below the routes root becomes one route. Its URL path comes from the
//! file's location (`users/get.ts` serves `/users/get`, `users/index.ts` serves
//! `/users`) and it is imported under a camel-case name derived from the same path
//! (`usersGetTs`).
//!
//! # Architecture
//!
//! 1. [`scanner`] - Collects all files below the routes root
//! 2. [`transform`] - Derives route keys and module identifiers from file paths
//! 3. [`table`] - Pairs every file with its route and identifier
//! 4. [`emitter`] - Renders the table as a TypeScript module
//! 5. [`serializer`] - Renders the table as a JSON or YAML manifest and writes output
//!
//! # Example Usage
//!
//! ```no_run
//! use route_table_gen::{
//!     emitter::TypeScriptEmitter,
//!     scanner::FileScanner,
//!     serializer::write_to_file,
//!     table::RouteTable,
//! };
//! use std::path::{Path, PathBuf};
//!
//! let files = FileScanner::new(PathBuf::from("src/routes")).scan().unwrap();
//! let table = RouteTable::build("src/routes", &files);
//! let module = TypeScriptEmitter::new("src").render(&table);
//! write_to_file(&module, Path::new("src/routes.ts")).unwrap();
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod emitter;
pub mod error;
pub mod scanner;
pub mod serializer;
pub mod table;
pub mod transform;
