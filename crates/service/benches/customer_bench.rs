use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::customer::{CustomerService, CustomerRegistrationRequest, CustomerUpdateRequest, repo::InMemoryCustomerDao};

fn bench_customer_service(c: &mut Criterion) {
    let svc = CustomerService::new(Arc::new(InMemoryCustomerDao::new()));
    let rt = tokio::runtime::Runtime::new().unwrap();

    // pre-populate outside of the benchmark
    for i in 0..1_000 {
        let req = CustomerRegistrationRequest { name: format!("Bench {i}"), email: format!("bench{i}@example.com"), age: 30 };
        rt.block_on(svc.add_customer(req)).unwrap();
    }

    c.bench_function("customer_get_by_id", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.get_customer_by_id(500)).unwrap();
        });
    });

    let mut next = 0u64;
    c.bench_function("customer_add", |b| {
        b.iter(|| {
            next += 1;
            let req = CustomerRegistrationRequest { name: "Added".into(), email: format!("add{next}@example.com"), age: 40 };
            let _ = rt.block_on(svc.add_customer(req)).unwrap();
        });
    });

    let mut age = 0;
    c.bench_function("customer_update_age", |b| {
        b.iter(|| {
            age += 1;
            let req = CustomerUpdateRequest { age: Some(age), ..Default::default() };
            let _ = rt.block_on(svc.update_customer(1, req)).unwrap();
        });
    });
}

criterion_group!(benches, bench_customer_service);
criterion_main!(benches);
