//! The built-in registry is shared between threads without locking.

use std::thread;
use asn1_vocab::oid;


#[test]
fn concurrent_first_use() {
    let handles: Vec<_> = (0..8).map(|i| {
        thread::spawn(move || {
            let reg = oid::registry();
            for _ in 0..100 {
                assert_eq!(
                    oid::name_to_oid("commonName"), "2.5.4.3"
                );
                assert_eq!(oid::oid_to_name("2.5.4.3"), "commonName");
            }
            (i, reg as *const _ as usize, reg.len())
        })
    }).collect();

    let mut seen = None;
    for handle in handles {
        let (_, addr, len) = handle.join().unwrap();
        assert_eq!(len, 204);
        match seen {
            None => seen = Some(addr),
            Some(prev) => assert_eq!(prev, addr),
        }
    }
}
