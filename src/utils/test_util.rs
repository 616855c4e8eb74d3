use rstest::fixture;

#[macro_export]
macro_rules! assert_eq_pretty {
    ($left:expr, $right:expr) => {
        assert_eq!($left, $right, "\n{:#?}\n{:#?}", $left, $right);
    };
}

pub use assert_eq_pretty;

pub struct Init;

#[fixture]
pub fn init() -> Init {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
    Init
}

/// Builds a GPX document with a single track segment.
pub struct GpxBuilder {
    name: String,
    waypoints: Vec<(String, f64, f64)>,
    points: Vec<(f64, f64)>,
    extra_metadata: String,
    extra_track: String,
}

impl GpxBuilder {
    pub fn new(name: &str) -> Self {
        GpxBuilder {
            name: name.to_string(),
            waypoints: Vec::new(),
            points: Vec::new(),
            extra_metadata: String::new(),
            extra_track: String::new(),
        }
    }

    pub fn waypoint(mut self, name: &str, lon: f64, lat: f64) -> Self {
        self.waypoints.push((name.to_string(), lon, lat));
        self
    }

    pub fn points(mut self, points: &[(f64, f64)]) -> Self {
        self.points.extend_from_slice(points);
        self
    }

    /// Raw XML placed inside `metadata` after the name.
    pub fn metadata(mut self, xml: &str) -> Self {
        self.extra_metadata.push_str(xml);
        self
    }

    /// Raw XML placed inside `trk` before the segment.
    pub fn track(mut self, xml: &str) -> Self {
        self.extra_track.push_str(xml);
        self
    }

    pub fn build(&self) -> String {
        let mut result = String::from(concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "\n",
            r#"<gpx version="1.1" creator="test" "#,
            r#"xmlns="http://www.topografix.com/GPX/1/1">"#,
            "\n"
        ));
        result += &format!(
            "<metadata><name>{}</name>{}</metadata>\n",
            self.name, self.extra_metadata
        );
        for (name, lon, lat) in &self.waypoints {
            result += &format!(
                "<wpt lat=\"{}\" lon=\"{}\"><name>{}</name></wpt>\n",
                lat, lon, name
            );
        }
        result += &format!("<trk>{}<trkseg>\n", self.extra_track);
        for (lon, lat) in &self.points {
            result += &format!(
                "<trkpt lat=\"{}\" lon=\"{}\"><ele>100</ele></trkpt>\n",
                lat, lon
            );
        }
        result += "</trkseg></trk>\n</gpx>\n";
        result
    }
}

/// One point per degree of longitude along the equator.
pub fn equator(len: usize) -> Vec<(f64, f64)> {
    (0..len).map(|x| (x as f64, 0.0)).collect()
}
