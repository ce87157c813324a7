mod support;

use brushy::{Brush, BrushSettings, Material, MaterialLibrary};
use nalgebra::{Vector2, Vector3};
use std::sync::Arc;
use support::*;

fn library() -> (MaterialLibrary, brushy::MaterialId, brushy::MaterialId) {
    let mut library = MaterialLibrary::new();
    let brick = library.insert(Material::new("brick").with_albedo(512, 256));
    let trim = library.insert(Material::new("trim"));
    (library, brick, trim)
}

#[test]
fn surfaces_group_faces_by_material() {
    let (library, brick, trim) = library();
    let mut brush = Brush::unit_box().with_materials(Arc::new(library));
    brush.set_face_material(0, Some(brick)).unwrap();
    brush.set_face_material(2, Some(trim)).unwrap();
    brush.set_face_material(1, Some(brick)).unwrap();
    brush.set_face_skip(5, true).unwrap();

    let surfaces = brush.surfaces();
    assert_eq!(surfaces.len(), 3);

    assert_eq!(surfaces[0].material, Some(brick));
    assert_eq!(surfaces[0].fans.iter().map(|f| f.face).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(surfaces[1].material, Some(trim));
    assert_eq!(surfaces[1].fans.iter().map(|f| f.face).collect::<Vec<_>>(), vec![2]);
    assert_eq!(surfaces[2].material, None);
    assert_eq!(surfaces[2].fans.iter().map(|f| f.face).collect::<Vec<_>>(), vec![3, 4]);

    for surface in &surfaces {
        let n = surface.vertex_count();
        assert_eq!(surface.normals.len(), n);
        assert_eq!(surface.uvs.len(), n);
        assert_eq!(surface.tangents.len(), n);
        let mut next = 0;
        for fan in &surface.fans {
            assert_eq!(fan.start, next);
            assert_eq!(fan.len, 4);
            next += fan.len;
        }
        assert_eq!(next, n);
    }
}

#[test]
fn skipped_faces_still_feed_collision() {
    let mut brush = Brush::unit_box();
    for i in 0..6 {
        brush.set_face_skip(i, true).unwrap();
    }
    assert!(brush.surfaces().is_empty());
    assert_eq!(brush.hull_points().len(), 8);
    assert!(brush.collision_shape().is_some());
}

#[test]
fn tangents_lie_in_the_face_plane() {
    let brush = Brush::unit_box();
    for surface in brush.surfaces() {
        for (tangent, normal) in surface.tangents.iter().zip(&surface.normals) {
            let t = Vector3::new(tangent[0], tangent[1], tangent[2]);
            assert!(approx_eq(t.norm(), 1.0, 1e-9));
            assert!(approx_eq(t.dot(normal), 0.0, 1e-9));
            assert!(tangent[3] == 1.0 || tangent[3] == -1.0);
        }
    }
}

#[test]
fn textured_faces_scale_uvs_by_texture_size() {
    let (library, brick, trim) = library();
    let mut brush = Brush::unit_box().with_materials(Arc::new(library));
    brush.set_face_material(0, Some(brick)).unwrap();
    brush.set_face_material(1, Some(trim)).unwrap();

    // +X projects onto (-Z, -Y); 512x256 texels at 1024 per unit repeat
    // every (0.5, 0.25) units
    let positions = brush.face_vertex_positions(0).unwrap();
    let brick_uvs = brush.face_vertex_uvs(0).unwrap();
    for (p, uv) in positions.iter().zip(&brick_uvs) {
        assert!(approx_eq(uv.x, -p.z * 2.0, 1e-9));
        assert!(approx_eq(uv.y, -p.y * 4.0, 1e-9));
    }

    // A material without albedo counts as a single texel
    let plain = Brush::unit_box();
    assert_eq!(brush.face_vertex_uvs(1).unwrap(), plain.face_vertex_uvs(1).unwrap());
    for uv in brush.face_vertex_uvs(1).unwrap() {
        assert!(approx_eq(uv.x.abs(), 1024.0, 1e-9));
        assert!(approx_eq(uv.y.abs(), 1024.0, 1e-9));
    }

    brush.set_texel_density(Vector2::new(2048.0, 2048.0));
    assert!(brush.is_dirty());
    let dense_uvs = brush.face_vertex_uvs(0).unwrap();
    for (p, uv) in positions.iter().zip(&dense_uvs) {
        assert!(approx_eq(uv.x, -p.z * 4.0, 1e-9));
        assert!(approx_eq(uv.y, -p.y * 8.0, 1e-9));
    }
    for uv in brush.face_vertex_uvs(1).unwrap() {
        assert!(approx_eq(uv.x.abs(), 2048.0, 1e-9));
    }
}

#[test]
fn output_toggles_do_not_invalidate() {
    let mut brush = Brush::unit_box();
    brush.rebuild();
    let revision = brush.revision();

    brush.set_visual_enabled(false);
    brush.set_collision_enabled(false);
    assert!(!brush.is_dirty());
    assert_eq!(brush.revision(), revision);

    assert!(brush.surfaces().is_empty());
    assert!(brush.collision_shape().is_none());
    assert_eq!(brush.hull_points().len(), 8);

    brush.set_settings(BrushSettings::default());
    assert!(!brush.is_dirty());
    assert_eq!(brush.surfaces().len(), 1);
    assert!(brush.collision_shape().is_some());
}

#[test]
fn collision_hull_matches_the_box() {
    let brush = Brush::unit_box();
    let shape = brush.collision_shape().expect("box has a hull");
    let hull = shape.as_convex_polyhedron().expect("hull is a convex polyhedron");
    assert_eq!(hull.points().len(), 8);
}
