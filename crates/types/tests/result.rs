#[macro_use]
mod common;

use std::cell::Cell;

use once_cell::sync::Lazy;
use types::{err, ok, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailCode {
    NoEntry,
    Access,
}

struct TestCase {
    name: &'static str,
    make: fn() -> Result<i32, FailCode>,
    is_ok: bool,
    or_five: i32,
    ok_view: Option<i32>,
}

static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "ok(1)",
            make: || ok(1),
            is_ok: true,
            or_five: 1,
            ok_view: Some(1),
        },
        TestCase {
            name: "ok(3)",
            make: || ok(3),
            is_ok: true,
            or_five: 3,
            ok_view: Some(3),
        },
        TestCase {
            name: "err(NoEntry)",
            make: || err(FailCode::NoEntry),
            is_ok: false,
            or_five: 5,
            ok_view: None,
        },
        TestCase {
            name: "err(Access)",
            make: || err(FailCode::Access),
            is_ok: false,
            or_five: 5,
            ok_view: None,
        },
    ]
});

#[test]
fn test_result_scenarios() {
    println!("=== Testing Result: Scenarios ===");
    for case in TEST_CASES.iter() {
        println!("  {}", case.name);
        let r = (case.make)();
        assert_eq!(r.is_ok(), case.is_ok, "{}", case.name);
        assert_eq!(r.is_err(), !case.is_ok, "{}", case.name);
        assert_eq!((case.make)().unwrap_or(5), case.or_five, "{}", case.name);
        assert_eq!((case.make)().ok().into_option(), case.ok_view, "{}", case.name);
        assert_eq!((case.make)().err().is_some(), !case.is_ok, "{}", case.name);
    }
    println!("✓ {} scenarios passed", TEST_CASES.len());
}

#[test]
fn test_unwrap_both_sides() {
    assert_eq!(ok::<i32, FailCode>(1).unwrap(), 1);
    assert_eq!(err::<i32, FailCode>(FailCode::NoEntry).unwrap_err(), FailCode::NoEntry);
    assert_eq!(ok::<i32, FailCode>(2).expect("ok"), 2);
    assert_eq!(err::<i32, FailCode>(FailCode::Access).expect_err("err"), FailCode::Access);
}

#[test]
fn test_variant_views() {
    println!("=== Testing Result: ok()/err() views ===");
    assert_eq!(ok::<i32, FailCode>(3).ok().unwrap(), 3);
    assert!(err::<i32, FailCode>(FailCode::NoEntry).ok().is_none());
    assert!(ok::<i32, FailCode>(3).err().is_none());
    assert_eq!(err::<i32, FailCode>(FailCode::NoEntry).err().unwrap(), FailCode::NoEntry);
    println!("✓ Views keep the matching side only");
}

#[test]
fn test_map_ok_and_map_err() {
    let calls = Cell::new(0u32);
    let bump = |v: i32| {
        calls.set(calls.get() + 1);
        v + 1
    };

    let mapped = ok::<i32, FailCode>(41).map_ok(bump);
    assert_eq!(calls.get(), 1);
    assert_eq!(mapped.unwrap(), 42);

    let untouched = err::<i32, FailCode>(FailCode::Access).map_ok(|v| {
        calls.set(calls.get() + 1);
        v
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(untouched.unwrap_err(), FailCode::Access);

    let described = err::<i32, FailCode>(FailCode::NoEntry).map_err(|e| format!("{:?}", e));
    assert_eq!(described.unwrap_err(), "NoEntry");

    let passthrough = ok::<i32, FailCode>(7).map_err(|_| -> String {
        panic!("error mapper must not run on Ok")
    });
    assert_eq!(passthrough.unwrap(), 7);
}

#[test]
fn test_equality() {
    println!("=== Testing Result: equality ===");
    assert_eq!(ok::<i32, FailCode>(1), ok(1));
    assert_ne!(ok::<i32, FailCode>(1), ok(2));
    assert_eq!(err::<i32, FailCode>(FailCode::NoEntry), err(FailCode::NoEntry));
    assert_ne!(err::<i32, FailCode>(FailCode::NoEntry), err(FailCode::Access));
    assert_ne!(ok::<i32, FailCode>(1), err(FailCode::NoEntry));
    assert_ne!(err::<i32, i32>(1), ok(1));
    println!("✓ Variant and payload both take part in equality");
}

#[test]
fn test_unwrap_or_else_receives_error() {
    let value = err::<usize, &str>("four").unwrap_or_else(|e| e.len());
    assert_eq!(value, 4);
}

#[test]
fn test_take_and_clone() {
    println!("=== Testing Result: take and clone ===");
    let mut source = err::<u8, String>(String::from("denied"));
    let copy = source.clone();
    let dest = source.take();

    assert_eq!(format!("{:?}", source), "Moved");
    assert_eq!(dest, copy);
    assert_eq!(dest.unwrap_err(), "denied");
    assert!(copy.is_err());
    println!("✓ Clone survives moving the original");
}

#[test]
fn test_std_interop_and_as_ref() {
    let r: Result<u8, FailCode> = Ok(9).into();
    assert_eq!(r.as_ref().unwrap(), &9);
    assert_eq!(r.into_result(), Ok(9));
    assert_eq!(format!("{:?}", err::<u8, FailCode>(FailCode::Access)), "Err(Access)");
}

fatal_test!(test_unwrap_on_err_aborts, ["PANIC: called `Result::unwrap()` on an `Err` value"], {
    err::<i32, FailCode>(FailCode::NoEntry).unwrap()
});

fatal_test!(test_unwrap_err_on_ok_aborts, ["PANIC: called `Result::unwrap_err()` on an `Ok` value"], {
    ok::<i32, FailCode>(1).unwrap_err()
});

fatal_test!(test_expect_err_reports_message, ["tests/result.rs:", "PANIC: lookup should fail"], {
    ok::<i32, FailCode>(1).expect_err("lookup should fail")
});

fatal_test!(test_query_after_take_aborts, ["PANIC: use of moved-from Result"], {
    let mut source = ok::<i32, FailCode>(1);
    let _dest = source.take();
    source.is_err()
});

fatal_test!(test_view_after_take_aborts, ["PANIC: use of moved-from Result"], {
    let mut source = err::<i32, FailCode>(FailCode::Access);
    let _dest = source.take();
    source.ok()
});

fatal_test!(test_unwrap_after_take_aborts, ["PANIC: use of moved-from Result"], {
    let mut source = ok::<i32, FailCode>(1);
    let _dest = source.take();
    source.unwrap()
});

fatal_test!(test_unwrap_err_after_take_aborts, ["PANIC: use of moved-from Result"], {
    let mut source = err::<i32, FailCode>(FailCode::NoEntry);
    let _dest = source.take();
    source.unwrap_err()
});

fatal_test!(test_unwrap_or_after_take_aborts, ["PANIC: use of moved-from Result"], {
    let mut source = err::<i32, FailCode>(FailCode::Access);
    let _dest = source.take();
    source.unwrap_or(5)
});

fatal_test!(test_compare_against_moved_aborts, ["PANIC: use of moved-from Result"], {
    let mut source = ok::<i32, FailCode>(1);
    let dest = source.take();
    dest == source
});

fatal_test!(test_clone_of_moved_aborts, ["PANIC: use of moved-from Result"], {
    let mut source = err::<i32, FailCode>(FailCode::Access);
    let _dest = source.take();
    source.clone()
});
