//! Static explanatory copy for the explorer page. Pure presentation; no
//! computed state.

/// Usage instructions shown under the chart.
pub const HOW_TO_USE_HTML: &str = r#"
<h2>How to use this app</h2>
<p>
This application is intended for visual exploration and discovery of research
publications on misinformation, disinformation and fake news. Every particle
in the visualisation is an academic publication. The particles are positioned
in space based on the semantic similarity of the paper abstracts; the closer
two points are, the more semantically similar their abstracts. You can hover
over the particles to read their titles and you can click them to be
redirected to the original source. You can zoom in the visualisation by
scrolling and you can reset the view by double clicking the white space
within the figure.
</p>
<h3>Filters</h3>
<p>
You can specify a range for the papers' publication date. You can also show
papers with a particular set of fields of study. The classification uses a
6-level hierarchy where level 0 is high level disciplines such as Biology and
Computer science while level 5 contains the most granular paper keywords.
Using the sidebar filters, you can first choose the level of the field of
study and then pick specific keywords within it.
</p>
"#;

/// Project background.
pub const ABOUT_HTML: &str = r#"
<h2>About</h2>
<p>
This prototype is part of a larger knowledge-discovery and research-measurement
project. The dashboard is a thin visualisation layer: all data collection,
embedding and projection happen in an offline pipeline, and the page you are
looking at only reads its precomputed output.
</p>
"#;

/// Data-provenance description.
pub const DATA_METHODS_HTML: &str = r#"
<h2>Appendix: Data &amp; methods</h2>
<p>
The corpus contains publications from the
<a href="https://www.microsoft.com/en-us/research/project/academic-knowledge/">Microsoft Academic Graph</a>
that were published between 2000 and 2020 and carried one of the following
terms as a field of study:
</p>
<ul>
  <li>misinformation</li>
  <li>disinformation</li>
  <li>fake news</li>
</ul>
<p>
Approximately 15K publications were fetched; the visualisation shows only
those with a DOI &mdash; roughly 5K documents.
</p>
<p>
To create the 2D visualisation, the paper abstracts were encoded to dense
vectors with a
<a href="https://github.com/UKPLab/sentence-transformers">sentence-DistilBERT</a>
model. That produced a 768-dimensional vector for each document, projected
down to 2D with <a href="https://umap-learn.readthedocs.io/en/latest/">UMAP</a>.
</p>
"#;
