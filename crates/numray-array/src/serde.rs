use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::array::Array;
use crate::dtype::ArrayElement;

impl<T> serde::Serialize for Array<T>
where
    T: ArrayElement + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Array", 2)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("shape", self.shape().dims())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Array<T>
where
    T: ArrayElement + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ArrayData<T> {
            data: Vec<T>,
            shape: Vec<usize>,
        }

        let ArrayData { data, shape } = ArrayData::deserialize(deserializer)?;

        Array::from_shape_vec(&shape, data).map_err(serde::de::Error::custom)
    }
}
