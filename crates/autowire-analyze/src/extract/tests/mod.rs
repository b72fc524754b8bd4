
use crate::prelude::*;
use autowire_testing_fixtures::{args, class, qual};

#[test]
fn single_interface_and_empty_marker_yield_scoped_contract() {
    let decl = class("App.Services.Foo")
        .namespace("App.Services")
        .contract("App.Services.IFoo")
        .build();

    let descriptor =
        try_extract(&decl, &MarkerArgs::default()).expect("Foo must be registrable");

    assert_eq!(descriptor.lifetime, Lifetime::Scoped);
    assert_eq!(descriptor.implementation, qual("App.Services.Foo"));
    assert_eq!(descriptor.contract, Some(qual("App.Services.IFoo")));
    assert!(!descriptor.register_self);
    assert_eq!(descriptor.namespace, "App.Services");
}

#[test]
fn abstract_declarations_are_excluded() {
    let decl = class("App.Base")
        .abstracted()
        .contract("App.IBase")
        .build();

    assert_eq!(try_extract(&decl, &MarkerArgs::default()), None);
}

#[test]
fn generic_declarations_are_excluded() {
    let decl = class("App.Repo")
        .generic(1)
        .contract("App.IRepo")
        .build();

    assert_eq!(try_extract(&decl, &MarkerArgs::default()), None);
}

#[test]
fn non_public_declarations_are_excluded() {
    for access in [Access::Internal, Access::Protected, Access::Private] {
        let decl = class("App.Hidden")
            .access(access)
            .contract("App.IHidden")
            .build();

        assert_eq!(
            try_extract(&decl, &MarkerArgs::default()),
            None,
            "{access} declarations must be skipped"
        );
    }
}

#[test]
fn lifetime_ordinal_selects_lifetime() {
    let cases = [
        (0, Lifetime::Singleton),
        (1, Lifetime::Scoped),
        (2, Lifetime::Transient),
    ];

    for (ordinal, expected) in cases {
        let decl = class("App.Svc").contract("App.ISvc").build();
        let marker_args = args().positional(Some(ArgValue::Int(ordinal))).build();

        let descriptor = try_extract(&decl, &marker_args).expect("eligible service");
        assert_eq!(descriptor.lifetime, expected, "ordinal {ordinal}");
    }
}

#[test]
fn unknown_lifetime_ordinal_falls_back_to_scoped() {
    let decl = class("App.Svc").contract("App.ISvc").build();
    let marker_args = args().positional(Some(ArgValue::Int(9))).build();

    let descriptor = try_extract(&decl, &marker_args).expect("eligible service");
    assert_eq!(descriptor.lifetime, Lifetime::Scoped);
}

#[test]
fn wrong_kind_lifetime_argument_falls_back_to_scoped() {
    let decl = class("App.Svc").contract("App.ISvc").build();
    let marker_args = args().positional(Some(ArgValue::Bool(true))).build();

    let descriptor = try_extract(&decl, &marker_args).expect("eligible service");
    assert_eq!(descriptor.lifetime, Lifetime::Scoped);
}

#[test]
fn explicit_as_overrides_inference() {
    let decl = class("App.Svc")
        .contract("App.IFirst")
        .contract("App.ISecond")
        .build();
    let marker_args = args()
        .named("As", ArgValue::TypeRef(qual("App.IChosen")))
        .build();

    let descriptor = try_extract(&decl, &marker_args).expect("explicit As must register");
    assert_eq!(descriptor.contract, Some(qual("App.IChosen")));
}

#[test]
fn as_self_of_wrong_kind_defaults_to_false() {
    // No inferable contract either, so the declaration collapses to None.
    let decl = class("App.Svc").build();
    let marker_args = args().named("AsSelf", ArgValue::Int(1)).build();

    assert_eq!(try_extract(&decl, &marker_args), None);
}

#[test]
fn zero_candidates_without_as_self_are_excluded() {
    let decl = class("App.Svc").build();

    assert_eq!(try_extract(&decl, &MarkerArgs::default()), None);
}

#[test]
fn ambiguous_candidates_without_as_self_are_excluded() {
    let decl = class("App.Svc")
        .contract("App.IFirst")
        .contract("App.ISecond")
        .build();

    assert_eq!(
        try_extract(&decl, &MarkerArgs::default()),
        None,
        "inference must refuse to guess between candidates"
    );
}

#[test]
fn ambiguous_candidates_with_as_self_register_self_only() {
    let decl = class("App.Services.Bar")
        .contract("App.Services.IBar")
        .contract("App.Services.IBarExtra")
        .build();
    let marker_args = args().named("AsSelf", ArgValue::Bool(true)).build();

    let descriptor = try_extract(&decl, &marker_args).expect("self registration stands alone");
    assert_eq!(descriptor.contract, None);
    assert!(descriptor.register_self);
}

#[test]
fn disposal_contract_is_never_an_inference_candidate() {
    // Disposal alone: nothing to infer, self keeps the registration alive.
    let decl = class("App.Cache")
        .contract("System.IDisposable")
        .build();
    let marker_args = args().named("AsSelf", ArgValue::Bool(true)).build();

    let descriptor = try_extract(&decl, &marker_args).expect("self registration");
    assert_eq!(descriptor.contract, None);

    // Disposal next to a real contract: the real contract survives narrowing.
    let decl = class("App.Cache")
        .contract("System.IDisposable")
        .contract("App.ICache")
        .build();

    let descriptor = try_extract(&decl, &MarkerArgs::default()).expect("ICache is unambiguous");
    assert_eq!(descriptor.contract, Some(qual("App.ICache")));
}

#[test]
fn non_public_and_generic_contracts_are_not_candidates() {
    let decl = class("App.Svc")
        .contract_with("App.IHidden", Access::Internal, 0)
        .contract_with("App.IGeneric", Access::Public, 1)
        .contract("App.IVisible")
        .build();

    let descriptor = try_extract(&decl, &MarkerArgs::default()).expect("one candidate remains");
    assert_eq!(descriptor.contract, Some(qual("App.IVisible")));
}

#[test]
fn global_namespace_falls_back_to_root_token() {
    let decl = class("Orphan").contract("IOrphan").build();

    let descriptor = try_extract(&decl, &MarkerArgs::default()).expect("eligible service");
    assert_eq!(descriptor.namespace, ROOT_NAMESPACE);
}
