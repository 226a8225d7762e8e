use crate::{transcript::TranscriptAcquirer, Summarizer, VideoDigest};

pub struct VideoDigestBuilder<T = (), S = ()> {
    acquirer: T,
    summarizer: S,
}

impl VideoDigestBuilder {
    pub fn new() -> Self {
        Self {
            acquirer: (),
            summarizer: (),
        }
    }
}

impl Default for VideoDigestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> VideoDigestBuilder<T, S> {
    pub fn acquirer<T2: TranscriptAcquirer + Send + Sync + 'static>(
        self,
        acquirer: T2,
    ) -> VideoDigestBuilder<T2, S> {
        VideoDigestBuilder {
            acquirer,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> VideoDigestBuilder<T, S2> {
        VideoDigestBuilder {
            acquirer: self.acquirer,
            summarizer,
        }
    }
}

impl<T, S> VideoDigestBuilder<T, S>
where
    T: TranscriptAcquirer + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> VideoDigest<T, S> {
        VideoDigest::new(self.acquirer, self.summarizer)
    }
}
