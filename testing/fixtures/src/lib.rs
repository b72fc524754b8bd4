//! Declaration builders and canned graphs shared by autowire tests.
//!
//! Builders panic on malformed fixture input; they are test-only surface.

use autowire_decl::prelude::*;

/// Parse a fixture qualified name.
#[must_use]
pub fn qual(name: &str) -> QualName {
    QualName::parse(name).expect("fixture qualified name must parse")
}

///
/// DeclBuilder
///

#[derive(Debug)]
pub struct DeclBuilder {
    decl: TypeDecl,
}

/// Start from a public, concrete, non-generic class named `name`.
#[must_use]
pub fn class(name: &str) -> DeclBuilder {
    DeclBuilder {
        decl: TypeDecl {
            name: qual(name),
            kind: DeclKind::Class,
            access: Access::Public,
            is_abstract: false,
            is_readonly: false,
            generic_arity: 0,
            namespace: None,
            contracts: Vec::new(),
            markers: Vec::new(),
            span: NameSpan::default(),
        },
    }
}

/// Start from a public record struct named `name` (options-type shape).
#[must_use]
pub fn record_struct(name: &str) -> DeclBuilder {
    class(name).kind(DeclKind::RecordStruct)
}

impl DeclBuilder {
    #[must_use]
    pub const fn kind(mut self, kind: DeclKind) -> Self {
        self.decl.kind = kind;
        self
    }

    #[must_use]
    pub const fn access(mut self, access: Access) -> Self {
        self.decl.access = access;
        self
    }

    #[must_use]
    pub const fn abstracted(mut self) -> Self {
        self.decl.is_abstract = true;
        self
    }

    #[must_use]
    pub const fn readonly(mut self) -> Self {
        self.decl.is_readonly = true;
        self
    }

    #[must_use]
    pub const fn generic(mut self, arity: u32) -> Self {
        self.decl.generic_arity = arity;
        self
    }

    #[must_use]
    pub fn namespace(mut self, ns: &str) -> Self {
        self.decl.namespace = Some(Namespace::parse(ns).expect("fixture namespace must parse"));
        self
    }

    /// Add a public, non-generic implemented contract.
    #[must_use]
    pub fn contract(self, name: &str) -> Self {
        self.contract_with(name, Access::Public, 0)
    }

    #[must_use]
    pub fn contract_with(mut self, name: &str, access: Access, generic_arity: u32) -> Self {
        self.decl.contracts.push(ContractRef {
            name: qual(name),
            access,
            generic_arity,
        });
        self
    }

    #[must_use]
    pub fn marker(mut self, family: &str, args: MarkerArgs) -> Self {
        self.decl.markers.push(Marker {
            family: qual(family),
            args,
        });
        self
    }

    #[must_use]
    pub fn span(mut self, file: &str, start: u32, len: u32) -> Self {
        self.decl.span = NameSpan {
            file: file.to_string(),
            start,
            len,
        };
        self
    }

    #[must_use]
    pub fn build(self) -> TypeDecl {
        self.decl
    }
}

///
/// ArgsBuilder
///

#[derive(Debug, Default)]
pub struct ArgsBuilder {
    args: MarkerArgs,
}

#[must_use]
pub fn args() -> ArgsBuilder {
    ArgsBuilder::default()
}

impl ArgsBuilder {
    /// Append a positional slot; `None` models a skipped argument.
    #[must_use]
    pub fn positional(mut self, value: Option<ArgValue>) -> Self {
        self.args.positional.push(value);
        self
    }

    #[must_use]
    pub fn named(mut self, name: &str, value: ArgValue) -> Self {
        self.args.named.push(NamedArg {
            name: name.to_string(),
            value,
        });
        self
    }

    #[must_use]
    pub fn build(self) -> MarkerArgs {
        self.args
    }
}

/// A small mixed graph exercising both marker families: two registrable
/// services, one ineligible internal type, one valid options type, and one
/// options type that violates the immutability rule.
#[must_use]
pub fn sample_graph() -> DeclGraph {
    DeclGraph::new(vec![
        class("App.Services.OrderService")
            .namespace("App.Services")
            .contract("App.Services.IOrderService")
            .marker(SERVICE_MARKER, MarkerArgs::default())
            .build(),
        class("App.Services.MemoryCache")
            .namespace("App.Services")
            .contract("System.IDisposable")
            .marker(
                SERVICE_MARKER,
                args()
                    .positional(Some(ArgValue::Int(0)))
                    .named("AsSelf", ArgValue::Bool(true))
                    .build(),
            )
            .build(),
        class("App.Internal.PathHelper")
            .namespace("App.Internal")
            .access(Access::Internal)
            .contract("App.Internal.IPathHelper")
            .marker(SERVICE_MARKER, MarkerArgs::default())
            .build(),
        record_struct("App.Options.RetryOptions")
            .namespace("App.Options")
            .readonly()
            .marker(OPTIONS_MARKER, MarkerArgs::default())
            .build(),
        record_struct("App.Options.SyncOptions")
            .namespace("App.Options")
            .span("Options/SyncOptions.cs", 214, 11)
            .marker(OPTIONS_MARKER, MarkerArgs::default())
            .build(),
    ])
}
