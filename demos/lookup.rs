use std::collections::HashMap;

use optional::{generate, optional, Lookup, Optional, OptionalIterExt};

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let stock = HashMap::from([("apple", 3), ("pear", 0), ("plum", 12)]);

    for name in ["apple", "kiwi"] {
        let count = stock.try_get(name);
        println!("{name}: {count}");
    }

    let total = optional! {
        let apples = stock.try_get("apple")?;
        let plums = stock.try_get("plum")?;
        apples + plums
    };
    println!("apples + plums = {total}");

    let restock: Vec<_> = ["apple", "pear", "plum", "kiwi"]
        .into_iter()
        .choose(|name| {
            stock
                .try_get(name)
                .select_many(|&n| Optional::from_value_or_default(n))
                .select(|_| name)
        })
        .collect();
    println!("in stock: {restock:?}");

    let counts = ["3", "x", "12"].map(Optional::<u32>::parse);
    println!("parsed: {:?}", optional::flatten(counts));

    let powers: Vec<u32> = generate(1u32, |x| {
        Optional::from_option(x.checked_mul(2)).select(|next| (next, x))
    })
    .take(5)
    .collect();
    println!("powers of two: {powers:?}");
}
