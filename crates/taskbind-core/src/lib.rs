//! taskbind-core
//!
//! Service task behavior resolution: decide which runtime behavior a service
//! task definition represents, build it through an injected factory and bind
//! it to the definition.
//!
//! # モジュール構成
//! - **domain**: TaskDefinition, ResolvedKind, ClassificationMiss, Diagnostic, ResolutionState
//! - **ports**: ActivityBehaviorFactory, DiagnosticSink
//! - **registry**: TypeRegistry（名前付き型の対応表）
//! - **app**: Classifier, BehaviorBinder, ResolverBuilder / ServiceTaskResolver
//! - **impls**: TracingDiagnosticSink, CollectingDiagnosticSink, DescriptorBehaviorFactory
//! - **config**: ResolverConfig（TOML）
//! - **testing**: RecordingBehaviorFactory

pub mod domain;
pub mod ports;
pub mod registry;
pub mod app;
pub mod impls;
pub mod config;
pub mod testing;

pub use app::{ResolverBuilder, ServiceTaskResolver, classify};
pub use domain::{ResolvedKind, TaskDefinition};
