/// egui rendering of the dashboard: control panel, top bar, charts and table.
pub mod panels;
pub mod plot;
pub mod table;
