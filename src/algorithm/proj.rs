use proj::Proj;

use crate::algorithm::native::MapCoords;
use crate::algorithm::reproject::Reprojector;
use crate::error::{GeoGmlError, Result};
use crate::geometry::{Coord, GeometryCollection};

/// Reproject a geometry using PROJ
pub trait Reproject {
    fn reproject(&self, proj: &Proj) -> Result<Self>
    where
        Self: Sized;
}

impl Reproject for GeometryCollection {
    fn reproject(&self, proj: &Proj) -> Result<Self> {
        self.try_map_coords(|coord| {
            let (x, y) = proj.convert((coord.x, coord.y))?;
            Ok::<_, proj::ProjError>(Coord { x, y, ..*coord })
        })
    }
}

/// A [`Reprojector`] backed by PROJ, resolving every srid as an EPSG code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjReprojector;

impl Reprojector for ProjReprojector {
    fn proj_params(&self, srid: i32) -> Option<String> {
        (srid > 0).then(|| format!("EPSG:{srid}"))
    }

    fn transform(
        &self,
        geom: &GeometryCollection,
        from: &str,
        to: &str,
    ) -> Result<GeometryCollection> {
        let proj = Proj::new_known_crs(from, to, None)
            .map_err(|err| GeoGmlError::Reprojection(err.to_string()))?;
        geom.reproject(&proj)
    }
}
