use criterion::{black_box, criterion_group, criterion_main, Criterion};

use litoral_cart::{Cart, CartLineInput, CustomerInfo};
use litoral_core::ProductId;
use litoral_message::{compile, MessageStyle};

fn sample_cart(lines: usize) -> Cart {
    let mut cart = Cart::new();
    for i in 0..lines {
        cart.add_line(
            CartLineInput {
                product_id: ProductId::new(format!("prod-{i}")),
                name: format!("Producto {i}"),
                code: format!("COD-{i:04}"),
                price: (i % 3 != 0).then_some(1_000 + (i as u64) * 750),
                image: None,
            },
            (i as u32 % 11) + 1,
        );
    }
    cart
}

fn bench_compile(c: &mut Criterion) {
    let customer = CustomerInfo {
        name: "Pesquería El Dorado".to_owned(),
        city: "Corrientes".to_owned(),
        notes: "Entrega en depósito".to_owned(),
    };
    let style = MessageStyle::default();

    for size in [5usize, 50, 500] {
        let cart = sample_cart(size);
        c.bench_function(&format!("compile_{size}_lines"), |b| {
            b.iter(|| compile(black_box(&cart), black_box(&customer), black_box(&style)));
        });
    }
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
