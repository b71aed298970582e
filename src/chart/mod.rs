/// Chart layer: backend-independent geometry and PNG rendering.
///
/// ```text
///  SampleSeries + MechanicalProperties
///        │
///        ▼
///   ┌──────────┐
///   │  layout   │  fit-line extension, axis ranges, labels (validated)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  render   │  plotters → in-memory RGB buffer → PNG via `image`
///   └──────────┘
/// ```

pub mod layout;
pub mod render;
