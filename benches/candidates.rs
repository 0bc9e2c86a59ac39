use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zarrs_dashboard::{catalog::ZarrCatalog, engine::Engine, name::GroupName};
use zarrs_storage::{store::MemoryStore, StoreKey, WritableStorageTraits};

fn catalog(num_groups: usize, num_arrays: usize) -> ZarrCatalog {
    let mut metadata = serde_json::Map::new();
    for group in 0..num_groups {
        metadata.insert(
            format!("group{group}/.zgroup"),
            serde_json::json!({"zarr_format": 2}),
        );
        for array in 0..num_arrays {
            metadata.insert(
                format!("group{group}/array{array}/.zarray"),
                serde_json::json!({
                    "zarr_format": 2, "shape": [1000], "chunks": [1000], "dtype": "<f4",
                    "compressor": null, "fill_value": null, "order": "C", "filters": null
                }),
            );
            let units = ["A", "T", "V"][array % 3];
            metadata.insert(
                format!("group{group}/array{array}/.zattrs"),
                serde_json::json!({"_ARRAY_DIMENSIONS": ["time"], "units": units}),
            );
        }
    }
    let zmetadata = serde_json::json!({"zarr_consolidated_format": 1, "metadata": metadata});
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            &StoreKey::new(".zmetadata").unwrap(),
            serde_json::to_vec(&zmetadata).unwrap().into(),
        )
        .unwrap();
    ZarrCatalog::open(store).unwrap()
}

fn data_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_arrays");
    for num_groups in [1, 8, 64] {
        let num_arrays = 32;
        let engine = Engine::new(Arc::new(catalog(num_groups, num_arrays)));
        let groups: Vec<GroupName> = (0..num_groups)
            .map(|group| GroupName::new(format!("group{group}")).unwrap())
            .collect();
        let all = engine.data_arrays(&groups, &[]).unwrap();
        let selection = vec![all[0].clone()];

        group.throughput(Throughput::Elements((num_groups * num_arrays) as u64));
        group.bench_function(BenchmarkId::new("unselected", num_groups), |b| {
            b.iter(|| engine.data_arrays(&groups, &[]).unwrap());
        });
        group.bench_function(BenchmarkId::new("selected", num_groups), |b| {
            b.iter(|| engine.data_arrays(&groups, &selection).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, data_arrays);
criterion_main!(benches);
