use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use zarrs_dashboard::{
    catalog::{Catalog, CatalogError, ZarrCatalog},
    dashboard::Dashboard,
    dataset::GroupDataset,
    engine::{Engine, EngineError},
    name::{FullyQualifiedName, GroupName},
    render::{PlotKind, PlotOutput, PlotSpecRenderer, EXPLORER_MULTIPLE_ARRAYS_ALERT},
    slot::SlotState,
};
use zarrs_storage::{
    storage_adapter::performance_metrics::PerformanceMetricsStorageAdapter, store::MemoryStore,
    StoreKey, WritableStorageTraits,
};

const ZMETADATA: &[u8] = include_bytes!("fixtures/30421.zmetadata");

fn store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .set(&StoreKey::new(".zmetadata").unwrap(), ZMETADATA.to_vec().into())
        .unwrap();
    store
}

/// Counts the groups opened by the wrapped catalog.
struct CountingCatalog<TCatalog> {
    catalog: TCatalog,
    opens: AtomicUsize,
}

impl<TCatalog> CountingCatalog<TCatalog> {
    fn new(catalog: TCatalog) -> Self {
        Self {
            catalog,
            opens: AtomicUsize::default(),
        }
    }

    fn opens(&self) -> usize {
        self.opens.load(Ordering::Relaxed)
    }
}

impl<TCatalog: Catalog> Catalog for CountingCatalog<TCatalog> {
    fn list_groups(&self) -> Result<Vec<GroupName>, CatalogError> {
        self.catalog.list_groups()
    }

    fn open_group(&self, group: &GroupName) -> Result<GroupDataset, CatalogError> {
        self.opens.fetch_add(1, Ordering::Relaxed);
        self.catalog.open_group(group)
    }

    fn url(&self) -> Option<&str> {
        self.catalog.url()
    }
}

fn catalog() -> Arc<CountingCatalog<ZarrCatalog>> {
    Arc::new(CountingCatalog::new(ZarrCatalog::open(store()).unwrap()))
}

fn names(names: &[&str]) -> Vec<FullyQualifiedName> {
    names.iter().map(|name| name.parse().unwrap()).collect()
}

fn groups(groups: &[&str]) -> Vec<GroupName> {
    groups.iter().map(|group| GroupName::new(*group).unwrap()).collect()
}

#[test]
fn catalog_groups() {
    let store = Arc::new(PerformanceMetricsStorageAdapter::new(store()));
    let catalog = ZarrCatalog::open(store.clone()).unwrap();
    assert_eq!(catalog.list_groups().unwrap(), groups(&["abm", "amc", "xdc"]));
    let xdc = catalog.open_group(&GroupName::new("xdc").unwrap()).unwrap();
    let data_vars: Vec<&str> = xdc.data_vars().keys().map(|name| name.as_str()).collect();
    assert_eq!(data_vars, vec!["ip_reference", "density", "gain", "profile"]);
    let coords: Vec<&str> = xdc.coords().keys().map(|name| name.as_str()).collect();
    assert_eq!(coords, vec!["time", "channel"]);
    assert_eq!(store.reads(), 1);
}

#[test]
fn dashboard_title_reports_catalog_url() {
    let catalog = ZarrCatalog::open(store())
        .unwrap()
        .with_url("https://s3.echo.stfc.ac.uk/mast/level2/shots/30421.zarr");
    let dashboard = Dashboard::new(Engine::new(Arc::new(catalog)), PlotSpecRenderer).unwrap();
    assert_eq!(
        dashboard.title(),
        "FAIR MAST Dashboard -- data @ https://s3.echo.stfc.ac.uk/mast/level2/shots/30421.zarr"
    );
    let dashboard = Dashboard::new(Engine::new(crate::catalog()), PlotSpecRenderer).unwrap();
    assert_eq!(dashboard.title(), "FAIR MAST Dashboard");
}

#[test]
fn engine_candidates_narrow_by_units() {
    let catalog = catalog();
    let engine = Engine::new(catalog.clone());
    let selected_groups = groups(&["amc", "xdc"]);
    assert_eq!(
        engine.data_arrays(&selected_groups, &[]).unwrap(),
        names(&[
            "amc/plasma_current",
            "amc/toroidal_field",
            "amc/sol_current",
            "xdc/ip_reference",
            "xdc/density",
            "xdc/gain",
            "xdc/profile",
        ])
    );
    assert_eq!(
        engine
            .data_arrays(&selected_groups, &names(&["amc/plasma_current"]))
            .unwrap(),
        names(&[
            "amc/plasma_current",
            "amc/sol_current",
            "xdc/ip_reference",
            "xdc/gain",
            "xdc/profile",
        ])
    );
    assert_eq!(catalog.opens(), 2);
}

#[test]
fn engine_dimensionless_arrays() {
    let engine = Engine::new(catalog());
    let abm = groups(&["abm"]);
    assert_eq!(engine.data_arrays(&abm, &[]).unwrap(), names(&["abm/flag"]));
    assert_eq!(engine.units(&"abm/flag".parse().unwrap()).as_deref(), Some(""));
    assert_eq!(
        engine.data_arrays(&abm, &names(&["abm/flag"])).unwrap(),
        names(&["abm/flag"])
    );
}

#[test]
fn dashboard_session() {
    let catalog = catalog();
    let mut dashboard = Dashboard::new(Engine::new(catalog.clone()), PlotSpecRenderer).unwrap();
    assert_eq!(dashboard.group_options(), groups(&["abm", "amc", "xdc"]));

    dashboard.select_groups(groups(&["amc", "xdc"])).unwrap();
    dashboard
        .select_arrays(
            0,
            names(&["amc/plasma_current", "xdc/gain", "xdc/ip_reference"]),
        )
        .unwrap();

    // The scalar gain cannot be plotted and is left out of the overlay.
    let view = dashboard.slot_view(0).unwrap();
    assert_eq!(
        view.state,
        SlotState::Selected {
            units: "A".to_string()
        }
    );
    let PlotOutput::Plot(plot) = &view.plot else {
        panic!("expected a plot")
    };
    let labels: Vec<&str> = plot.layers.iter().map(|layer| layer.label.as_str()).collect();
    assert_eq!(labels, vec!["amc/plasma_current", "xdc/ip_reference"]);
    assert!(plot.layers.iter().all(|layer| layer.kind == PlotKind::Line));
    assert_eq!(view.details.len(), 3);
    assert_eq!(
        view.details[0].to_string(),
        "amc/plasma_current (time: 3000) float64 [A]\nCoordinates: time\nAttributes:\n    long_name: \"Plasma current\""
    );

    // A second plot is independent of the first.
    assert_eq!(dashboard.add_plot().unwrap(), 2);
    dashboard.select_arrays(1, names(&["xdc/density"])).unwrap();
    assert_eq!(
        dashboard.slot(1).unwrap().candidates(),
        names(&["xdc/density"])
    );
    let PlotOutput::Plot(plot) = dashboard.slot_view(1).unwrap().plot else {
        panic!("expected a plot")
    };
    assert_eq!(plot.layers[0].kind, PlotKind::Image);

    dashboard.set_explorer_mode(true);
    assert_eq!(
        dashboard.slot_view(0).unwrap().plot,
        PlotOutput::Alert(EXPLORER_MULTIPLE_ARRAYS_ALERT.to_string())
    );
    assert!(dashboard.slot_view(1).unwrap().plot.plot().unwrap().explorer);

    // Clearing a selection re-widens its candidates.
    dashboard.select_arrays(0, vec![]).unwrap();
    assert_eq!(dashboard.slot(0).unwrap().state(), SlotState::Unselected);
    assert_eq!(dashboard.slot(0).unwrap().candidates().len(), 7);

    assert_eq!(catalog.opens(), 2);
}

#[test]
fn dashboard_group_not_in_catalog() {
    let mut dashboard = Dashboard::new(Engine::new(catalog()), PlotSpecRenderer).unwrap();
    assert!(matches!(
        dashboard.select_groups(groups(&["pf"])),
        Err(EngineError::CatalogError(CatalogError::GroupNotFound(_)))
    ));
}
