use crate::error::{GeoGmlError, Result};
use crate::geometry::{Coord, CoordBuffer, GeometryCollection, LineString, Point, Polygon, Ring};

/// Rebuild a geometry by applying a function to each of its vertices.
///
/// The closure receives all four ordinates; the output keeps the dimension of the input.
pub trait MapCoords {
    type Output;

    fn map_coords<F>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> Coord,
    {
        self.try_map_coords(|coord| Ok::<_, GeoGmlError>(map_op(coord)))
    }

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        GeoGmlError: From<E>;
}

impl MapCoords for CoordBuffer {
    type Output = CoordBuffer;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        GeoGmlError: From<E>,
    {
        let mut output = CoordBuffer::new(self.dim(), self.len());
        for (i, coord) in self.iter().enumerate() {
            output.set(i, map_op(&coord)?);
        }
        Ok(output)
    }
}

impl MapCoords for Point {
    type Output = Point;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        GeoGmlError: From<E>,
    {
        Ok(Point::new(map_op(&self.coord())?, self.dim()))
    }
}

impl MapCoords for LineString {
    type Output = LineString;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        GeoGmlError: From<E>,
    {
        Ok(self.coords().try_map_coords(map_op)?.into())
    }
}

impl MapCoords for Ring {
    type Output = Ring;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        GeoGmlError: From<E>,
    {
        Ok(self.coords().try_map_coords(map_op)?.into())
    }
}

impl MapCoords for Polygon {
    type Output = Polygon;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        GeoGmlError: From<E>,
    {
        let exterior = self.exterior().try_map_coords(&map_op)?;
        let interiors = self
            .interiors()
            .iter()
            .map(|ring| ring.try_map_coords(&map_op))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::from_rings(exterior, interiors))
    }
}

impl MapCoords for GeometryCollection {
    type Output = GeometryCollection;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        GeoGmlError: From<E>,
    {
        let mut output = GeometryCollection::new(self.dim());
        output.set_srid(self.srid());
        output.set_declared_type(self.declared_type());
        for point in self.points() {
            output.push_point(&point.try_map_coords(&map_op)?);
        }
        for line in self.linestrings() {
            output.insert_linestring(line.try_map_coords(&map_op)?);
        }
        for polygon in self.polygons() {
            output.insert_polygon(polygon.try_map_coords(&map_op)?);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometry::mixed_collection;

    #[test]
    fn translate_collection() {
        let geom = mixed_collection();
        let moved = geom
            .map_coords(|c| Coord {
                x: c.x + 100.,
                ..*c
            })
            .unwrap();
        assert_eq!(moved.srid(), geom.srid());
        assert_eq!(moved.points()[0].x(), 101.);
        assert_eq!(moved.polygons()[0].interior(0).point(0), Coord::xy(102., 2.));
    }

    #[test]
    fn failing_closure_propagates() {
        let geom = mixed_collection();
        let result = geom.try_map_coords(|c| {
            if c.x > 5. {
                Err(GeoGmlError::General("out of range".to_string()))
            } else {
                Ok(*c)
            }
        });
        assert!(result.is_err());
    }
}
