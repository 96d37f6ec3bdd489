use super::bloch::BlochVector;

/// One labelled vector drawn on a Bloch sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedVector {
    /// Legend label, e.g. `|+⟩`.
    pub label: String,
    /// Position on the sphere.
    pub vector: BlochVector,
}

/// A single titled Bloch sphere with one or more vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct BlochPlot {
    title: String,
    vectors: Vec<PlottedVector>,
}

impl BlochPlot {
    /// Creates an empty plot.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), vectors: Vec::new() }
    }

    /// Adds a labelled vector.
    pub fn with_vector(mut self, label: impl Into<String>, vector: BlochVector) -> Self {
        self.vectors.push(PlottedVector { label: label.into(), vector });
        self
    }

    /// Adds several labelled vectors, keeping their order.
    pub fn with_vectors<L, I>(mut self, vectors: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, BlochVector)>,
    {
        for (label, vector) in vectors {
            self.vectors.push(PlottedVector { label: label.into(), vector });
        }
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn vectors(&self) -> &[PlottedVector] {
        &self.vectors
    }
}

/// One or more Bloch plots shown side by side.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    plots: Vec<BlochPlot>,
}

impl Figure {
    /// A figure holding a single plot.
    pub fn single(plot: BlochPlot) -> Self {
        Self { plots: vec![plot] }
    }

    /// Appends a subplot to the right.
    pub fn with_plot(mut self, plot: BlochPlot) -> Self {
        self.plots.push(plot);
        self
    }

    pub fn plots(&self) -> &[BlochPlot] {
        &self.plots
    }

    /// Titles of every subplot, left to right.
    pub fn titles(&self) -> Vec<&str> {
        self.plots.iter().map(BlochPlot::title).collect()
    }
}
