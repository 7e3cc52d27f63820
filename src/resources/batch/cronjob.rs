//! CronJob resource implementation

use crate::resources::format::{
    format_label_selector, layout_container_cells, print_bool_opt, translate_timestamp_since, NONE,
};
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::batch::v1::CronJob;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for CronJob {
    const KIND: &'static str = "CronJob";
    const GROUP: &'static str = "batch";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for CronJob {
    fn columns() -> &'static [&'static str] {
        &[
            "Name",
            "Schedule",
            "Suspend",
            "Active",
            "Last Schedule",
            "Age",
            "Containers",
            "Images",
            "Selector",
        ]
    }

    fn to_row(&self) -> Row {
        let spec = self.spec.as_ref();
        let status = self.status.as_ref();

        let last_schedule = status
            .and_then(|s| s.last_schedule_time.as_ref())
            .map(|t| translate_timestamp_since(Some(t)))
            .unwrap_or_else(|| NONE.to_string());
        let active = status
            .and_then(|s| s.active.as_ref())
            .map(Vec::len)
            .unwrap_or(0);

        let job_spec = spec.and_then(|s| s.job_template.spec.as_ref());
        let containers = job_spec
            .and_then(|j| j.template.spec.as_ref())
            .map(|p| p.containers.as_slice())
            .unwrap_or_default();
        let (names, images) = layout_container_cells(containers);

        let mut row = Row::new();
        row.set("Name", self.name());
        row.set("Schedule", spec.map(|s| s.schedule.as_str()).unwrap_or(""));
        row.set("Suspend", print_bool_opt(spec.and_then(|s| s.suspend)));
        row.set("Active", active);
        row.set("Last Schedule", last_schedule);
        row.set("Age", self.age());
        row.set("Containers", names);
        row.set("Images", images);
        row.set(
            "Selector",
            format_label_selector(job_spec.and_then(|j| j.selector.as_ref())),
        );
        row
    }
}
