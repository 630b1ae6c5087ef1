use super::*;
use crate::types::WindingOrder;

fn one_triangle() -> MeshData {
  let mut mesh = MeshData::new();
  mesh.push_triangle(
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    WindingOrder::Forward.permutation(),
    [0.0, 0.0, 1.0],
    [1.0; 4],
  );
  mesh
}

#[test]
fn test_recording_sink_records_calls() {
  let mesh = one_triangle();
  let mut sink = RecordingSink::new();

  sink.create_mesh_section(4, &mesh);
  sink.update_mesh_section(4, &MeshData::new());

  assert_eq!(
    sink.calls,
    vec![
      SinkCall { op: SinkOp::Create, section: 4, vertex_count: 3, triangle_count: 1 },
      SinkCall { op: SinkOp::Update, section: 4, vertex_count: 0, triangle_count: 0 },
    ]
  );
  assert_eq!(sink.last_mesh, Some(MeshData::new()));
}

#[test]
fn test_sinks_are_object_safe() {
  let mesh = one_triangle();
  let mut sinks: Vec<Box<dyn MeshSink>> = vec![Box::new(NullSink), Box::new(RecordingSink::new())];
  for sink in &mut sinks {
    sink.create_mesh_section(0, &mesh);
    sink.update_mesh_section(0, &mesh);
  }
}
