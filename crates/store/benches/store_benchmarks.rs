use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::Utc;
use haulbill_core::EntityId;
use haulbill_invoicing::{
    InvoiceItem, NewInvoice, OtherCharge, default_due_date, invoice_totals,
};
use haulbill_masterdata::{Customer, TransportCompany, Vehicle};
use haulbill_store::{DataStore, seed_demo_data};

fn seeded_store() -> (DataStore, Customer, TransportCompany, Vehicle) {
    let store = DataStore::new();
    seed_demo_data(&store).unwrap();

    let customer = store.list_customers().into_iter().next().unwrap();
    let company = store.list_transport_companies().into_iter().next().unwrap();
    let vehicle = store.list_vehicles().into_iter().next().unwrap();
    (store, customer, company, vehicle)
}

fn make_items(vehicle: &Vehicle, count: usize) -> Vec<InvoiceItem> {
    (0..count)
        .map(|i| {
            InvoiceItem::new(
                EntityId::new(),
                format!("Transport job {i}"),
                vehicle.clone(),
                Vec::new(),
                100.0 + i as f64,
                vec![OtherCharge {
                    id: EntityId::new(),
                    description: "Toll fees".to_string(),
                    amount: 12.5,
                }],
            )
        })
        .collect()
}

fn make_draft(
    customer: &Customer,
    company: &TransportCompany,
    vehicle: &Vehicle,
    item_count: usize,
) -> NewInvoice {
    let date = Utc::now();
    NewInvoice {
        date,
        due_date: default_due_date(date),
        customer: customer.clone(),
        transport_company: company.clone(),
        items: make_items(vehicle, item_count),
        status: None,
        notes: None,
    }
}

fn bench_invoice_creation_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("invoice_creation_latency");
    group.sample_size(1000);

    for item_count in [1usize, 10, 50].iter() {
        group.bench_with_input(
            BenchmarkId::new("create_invoice", item_count),
            item_count,
            |b, &count| {
                let (store, customer, company, vehicle) = seeded_store();
                let template = make_draft(&customer, &company, &vehicle, count);
                b.iter(|| {
                    store
                        .create_invoice(black_box(template.clone()))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_totals_derivation_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("totals_derivation_throughput");

    for item_count in [1usize, 10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*item_count as u64));
        group.bench_with_input(
            BenchmarkId::new("invoice_totals", item_count),
            item_count,
            |b, &count| {
                let (_, _, _, vehicle) = seeded_store();
                let items = make_items(&vehicle, count);
                b.iter(|| black_box(invoice_totals(black_box(&items))));
            },
        );
    }

    group.finish();
}

fn bench_referential_check_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("referential_check_scan");

    for invoice_count in [10usize, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("blocked_vehicle_delete", invoice_count),
            invoice_count,
            |b, &count| {
                let (store, customer, company, vehicle) = seeded_store();
                let template = make_draft(&customer, &company, &vehicle, 2);
                for _ in 0..count {
                    store.create_invoice(template.clone()).unwrap();
                }

                // Every iteration hits the full invoice scan and fails
                // without mutating, so the store stays the same size.
                b.iter(|| {
                    let err = store.delete_vehicle(black_box(vehicle.id)).unwrap_err();
                    black_box(err)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_invoice_creation_latency,
    bench_totals_derivation_throughput,
    bench_referential_check_scan
);
criterion_main!(benches);
