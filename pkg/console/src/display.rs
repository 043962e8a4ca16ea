use pkg_types::ResourceQuota;

use crate::field::QuotaResource;

/// One consumed/allotted line of the usage summary.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaRow {
    pub resource: QuotaResource,
    pub numerator: String,
    pub denominator: String,
    pub label: &'static str,
    consumed: f64,
    allotted: f64,
}

impl QuotaRow {
    fn new(resource: QuotaResource, consumed: Option<f64>, allotted: Option<f64>) -> Self {
        let consumed = amount(consumed);
        let allotted = amount(allotted);
        let (numerator, denominator, label) = match resource {
            QuotaResource::Cpu => (count(consumed), count(allotted), "CPU cores"),
            QuotaResource::Memory => (gib(consumed), gib(allotted), "RAM GB"),
            QuotaResource::Instances => (count(consumed), count(allotted), "Instances"),
        };
        Self {
            resource,
            numerator,
            denominator,
            label,
            consumed,
            allotted,
        }
    }

    /// `"<consumed>/<allotted>"`
    pub fn ratio(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    /// Consumed share of the allotment, `None` when nothing is allotted.
    pub fn utilization(&self) -> Option<f64> {
        if self.allotted > 0.0 {
            Some(self.consumed / self.allotted)
        } else {
            None
        }
    }
}

/// Read-only usage summary of a tenant's personal workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaDisplay {
    pub cpu: QuotaRow,
    pub memory: QuotaRow,
    pub instances: QuotaRow,
}

impl QuotaDisplay {
    /// Project usage and allotment into display strings. Either side may be
    /// missing, in whole or per field; missing renders as zero.
    pub fn render(consumed: Option<&ResourceQuota>, allotted: Option<&ResourceQuota>) -> Self {
        let row = |resource: QuotaResource, pick: fn(&ResourceQuota) -> Option<f64>| {
            QuotaRow::new(
                resource,
                consumed.and_then(pick),
                allotted.and_then(pick),
            )
        };
        Self {
            cpu: row(QuotaResource::Cpu, |q| q.cpu),
            memory: row(QuotaResource::Memory, |q| q.memory),
            instances: row(QuotaResource::Instances, |q| q.instances),
        }
    }

    pub fn rows(&self) -> [&QuotaRow; 3] {
        [&self.cpu, &self.memory, &self.instances]
    }
}

// Missing, NaN and negative zero all show as a plain 0.
fn amount(v: Option<f64>) -> f64 {
    match v {
        Some(x) if !x.is_nan() && x != 0.0 => x,
        _ => 0.0,
    }
}

fn count(v: f64) -> String {
    format!("{}", v)
}

fn gib(v: f64) -> String {
    format!("{:.1}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_renders_as_zero() {
        let d = QuotaDisplay::render(None, None);
        assert_eq!(d.cpu.ratio(), "0/0");
        assert_eq!(d.memory.ratio(), "0.0/0.0");
        assert_eq!(d.instances.ratio(), "0/0");
        assert_eq!(d.cpu.utilization(), None);
    }

    #[test]
    fn partial_records() {
        let consumed = ResourceQuota {
            cpu: Some(3.0),
            ..Default::default()
        };
        let allotted = ResourceQuota {
            cpu: Some(10.0),
            ..Default::default()
        };
        let d = QuotaDisplay::render(Some(&consumed), Some(&allotted));
        assert_eq!(d.cpu.ratio(), "3/10");
        assert_eq!(d.memory.ratio(), "0.0/0.0");
        assert_eq!(d.instances.ratio(), "0/0");
        assert_eq!(d.cpu.utilization(), Some(0.3));
    }

    #[test]
    fn memory_has_one_fractional_digit() {
        let consumed = ResourceQuota::new(2.0, 1.24, 1.0);
        let allotted = ResourceQuota::new(8.0, 16.0, 5.0);
        let d = QuotaDisplay::render(Some(&consumed), Some(&allotted));
        assert_eq!(d.memory.numerator, "1.2");
        assert_eq!(d.memory.denominator, "16.0");
        assert_eq!(d.instances.ratio(), "1/5");
    }

    #[test]
    fn only_one_side_present() {
        let allotted = ResourceQuota::new(4.0, 8.0, 2.0);
        let d = QuotaDisplay::render(None, Some(&allotted));
        assert_eq!(d.cpu.ratio(), "0/4");
        assert_eq!(d.memory.ratio(), "0.0/8.0");
        assert_eq!(d.instances.utilization(), Some(0.0));

        let d = QuotaDisplay::render(Some(&allotted), None);
        assert_eq!(d.instances.ratio(), "2/0");
    }

    #[test]
    fn labels_and_order() {
        let d = QuotaDisplay::render(None, None);
        let labels: Vec<&str> = d.rows().iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["CPU cores", "RAM GB", "Instances"]);
    }

    #[test]
    fn nan_and_negative_zero_render_as_zero() {
        let weird = ResourceQuota {
            cpu: Some(f64::NAN),
            memory: Some(-0.0),
            instances: Some(-0.0),
        };
        let d = QuotaDisplay::render(Some(&weird), None);
        assert_eq!(d.cpu.numerator, "0");
        assert_eq!(d.memory.numerator, "0.0");
        assert_eq!(d.instances.numerator, "0");
    }
}
