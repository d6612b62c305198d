pub mod list {
    use serde::de::{SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;
    use std::iter::{FromIterator, IntoIterator};
    use std::marker::PhantomData;
    use std::ptr;
    use thiserror::Error;

    // 错误定义
    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum ListError {
        #[error("索引越界: index 为 {index}，但链表长度仅为 {len}")]
        IndexOutOfBounds { index: usize, len: usize },
    }

    #[derive(Debug)]
    pub struct Node<T> {
        pub(crate) data: T,
        prev: *mut Node<T>,
        pub(crate) next: *mut Node<T>,
    }

    /// 通用双向链表
    ///
    /// 每个节点独占其数据的所有权，节点内存由 `Box` 分配、链表统一释放。
    /// `head`/`tail` 为空指针当且仅当 `len == 0`。
    ///
    /// 链表内部不做任何加锁，单线程使用；由于持有裸指针，类型本身
    /// 不是 `Send`/`Sync`，跨线程共享需要调用方自行加外部同步。
    pub struct DoublyLinkedList<T> {
        pub(crate) head: *mut Node<T>,
        tail: *mut Node<T>,
        len: usize,
        marker: PhantomData<Box<Node<T>>>,
    }

    // 基础实现
    impl<T> DoublyLinkedList<T> {
        /// 构造一个新的空双向链表
        ///
        /// # 返回值
        /// 返回一个初始化为空的 `DoublyLinkedList` 实例，`head`/`tail`
        /// 为空指针，`len` 为 0
        pub fn new() -> Self {
            DoublyLinkedList {
                head: ptr::null_mut(),
                tail: ptr::null_mut(),
                len: 0,
                marker: PhantomData,
            }
        }

        /// 获取链表当前的元素数量
        ///
        /// 复杂度: O(1)
        pub fn len(&self) -> usize {
            self.len
        }

        /// 判断链表是否为空
        ///
        /// 复杂度: O(1)
        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        /// 清空链表，逐个析构所有节点及其数据
        ///
        /// 清空后链表仍然可用，可以继续插入新元素
        ///
        /// # 操作逻辑
        /// 不断从头部弹出元素直到链表为空，每个元素的析构逻辑
        /// 恰好执行一次
        pub fn clear(&mut self) {
            while self.pop_front().is_some() {}
        }

        /// 在双向链表的头部插入一个新元素
        ///
        /// # 参数
        /// - `data`: 要插入到链表头部的数据，所有权转移给链表
        ///
        /// 复杂度: O(1)
        pub fn push_front(&mut self, data: T) {
            let new_node = Box::into_raw(Box::new(Node {
                data,
                prev: ptr::null_mut(),
                next: self.head,
            }));

            if !self.head.is_null() {
                unsafe {
                    (*self.head).prev = new_node;
                }
            } else {
                self.tail = new_node;
            }

            self.head = new_node;
            self.len += 1;
        }

        /// 在双向链表的尾部插入一个新元素
        ///
        /// # 参数
        /// - `data`: 要插入到链表尾部的数据，所有权转移给链表
        ///
        /// 复杂度: O(1)
        pub fn push_back(&mut self, data: T) {
            let new_node = Box::into_raw(Box::new(Node {
                data,
                prev: self.tail,
                next: ptr::null_mut(),
            }));

            if !self.tail.is_null() {
                unsafe {
                    (*self.tail).next = new_node;
                }
            } else {
                self.head = new_node;
            }

            self.tail = new_node;
            self.len += 1;
        }

        /// 移除并返回链表头部的元素
        ///
        /// # 返回值
        /// - 链表非空时返回 `Some(data)`，数据所有权转移给调用方，
        ///   不会执行数据的析构逻辑
        /// - 链表为空时返回 `None`
        ///
        /// 复杂度: O(1)
        pub fn pop_front(&mut self) -> Option<T> {
            if self.head.is_null() {
                return None;
            }

            unsafe {
                let old_head = Box::from_raw(self.head);
                self.head = old_head.next;

                if !self.head.is_null() {
                    (*self.head).prev = ptr::null_mut();
                } else {
                    self.tail = ptr::null_mut();
                }

                self.len -= 1;
                Some(old_head.data)
            }
        }

        /// 移除并返回链表尾部的元素
        ///
        /// # 返回值
        /// - 链表非空时返回 `Some(data)`，数据所有权转移给调用方，
        ///   不会执行数据的析构逻辑
        /// - 链表为空时返回 `None`
        ///
        /// 复杂度: O(1)
        pub fn pop_back(&mut self) -> Option<T> {
            if self.tail.is_null() {
                return None;
            }

            unsafe {
                let old_tail = Box::from_raw(self.tail);
                self.tail = old_tail.prev;

                if !self.tail.is_null() {
                    (*self.tail).next = ptr::null_mut();
                } else {
                    self.head = ptr::null_mut();
                }

                self.len -= 1;
                Some(old_tail.data)
            }
        }

        /// 获取链表头部元素的引用
        ///
        /// # 返回值
        /// 链表非空时返回 `Some(&data)`，为空时返回 `None`
        pub fn front(&self) -> Option<&T> {
            if self.head.is_null() {
                None
            } else {
                unsafe { Some(&(*self.head).data) }
            }
        }

        /// 获取链表尾部元素的引用
        ///
        /// # 返回值
        /// 链表非空时返回 `Some(&data)`，为空时返回 `None`
        pub fn back(&self) -> Option<&T> {
            if self.tail.is_null() {
                None
            } else {
                unsafe { Some(&(*self.tail).data) }
            }
        }

        /// 获取链表头部元素的可变引用
        pub fn front_mut(&mut self) -> Option<&mut T> {
            if self.head.is_null() {
                None
            } else {
                unsafe { Some(&mut (*self.head).data) }
            }
        }

        /// 获取链表尾部元素的可变引用
        pub fn back_mut(&mut self) -> Option<&mut T> {
            if self.tail.is_null() {
                None
            } else {
                unsafe { Some(&mut (*self.tail).data) }
            }
        }

        /// 在指定下标处插入一个新元素
        ///
        /// # 参数
        /// - `index`: 插入位置，合法范围为 `0 ..= len`，等于 `len` 时
        ///   等价于 `push_back`
        /// - `data`: 要插入的数据，所有权转移给链表
        ///
        /// # 返回值
        /// - 下标合法时返回 `Ok(())`
        /// - 下标越界时返回 `Err(ListError::IndexOutOfBounds)`，链表不变
        ///
        /// 复杂度: O(n)，会从距离 `index` 较近的一端开始遍历
        pub fn insert(&mut self, index: usize, data: T) -> Result<(), ListError> {
            if index > self.len {
                return Err(ListError::IndexOutOfBounds {
                    index,
                    len: self.len,
                });
            }

            if index == 0 {
                self.push_front(data);
                return Ok(());
            }
            if index == self.len {
                self.push_back(data);
                return Ok(());
            }

            // 此处 0 < index < len，node 一定指向一个内部节点
            unsafe {
                let node = self.node_at(index);
                let prev = (*node).prev;
                let new_node = Box::into_raw(Box::new(Node {
                    data,
                    prev,
                    next: node,
                }));
                (*prev).next = new_node;
                (*node).prev = new_node;
            }
            self.len += 1;
            Ok(())
        }

        // 定位第 index 个节点，调用方保证 index < len
        fn node_at(&self, index: usize) -> *mut Node<T> {
            if index <= self.len / 2 {
                let mut current = self.head;
                for _ in 0..index {
                    unsafe {
                        current = (*current).next;
                    }
                }
                current
            } else {
                let mut current = self.tail;
                for _ in 0..(self.len - 1 - index) {
                    unsafe {
                        current = (*current).prev;
                    }
                }
                current
            }
        }

        /// 原地反转链表
        ///
        /// # 操作逻辑
        /// 交换每个节点的 `prev`/`next` 指针，再交换 `head`/`tail`，
        /// 不发生任何数据拷贝
        ///
        /// 复杂度: O(n)
        pub fn reverse(&mut self) {
            let mut current = self.head;
            while !current.is_null() {
                unsafe {
                    let next = (*current).next;
                    (*current).next = (*current).prev;
                    (*current).prev = next;
                    current = next;
                }
            }
            std::mem::swap(&mut self.head, &mut self.tail);
        }

        /// 将另一个链表的全部节点拼接到当前链表尾部
        ///
        /// # 参数
        /// - `other`: 被拼接的链表，其节点所有权整体转移给当前链表，
        ///   调用后 `other` 变为空链表，句柄仍然可用
        ///
        /// # 操作逻辑
        /// 仅做指针拼接，不发生任何数据拷贝，也不执行任何析构逻辑
        ///
        /// 复杂度: O(1)
        pub fn append(&mut self, other: &mut Self) {
            if other.is_empty() {
                return;
            }

            if self.is_empty() {
                self.head = other.head;
                self.tail = other.tail;
                self.len = other.len;
            } else {
                unsafe {
                    (*self.tail).next = other.head;
                    (*other.head).prev = self.tail;
                }
                self.tail = other.tail;
                self.len += other.len;
            }

            other.head = ptr::null_mut();
            other.tail = ptr::null_mut();
            other.len = 0;
        }

        /// 使用自定义拷贝函数复制链表
        ///
        /// # 参数
        /// - `f`: 对每个元素生成副本的函数，新链表第 `i` 个元素为
        ///   `f(&self[i])`
        ///
        /// # 返回值
        /// 返回一个结构相同的新链表，新旧链表的数据存储完全独立
        ///
        /// 复杂度: O(n)
        pub fn copy_with<F>(&self, mut f: F) -> Self
        where
            F: FnMut(&T) -> T,
        {
            self.iter().map(|item| f(item)).collect()
        }
    }

    // 需要深拷贝能力的派生操作
    impl<T: Clone> DoublyLinkedList<T> {
        /// 连接两个链表，返回一个全新的链表
        ///
        /// # 参数
        /// - `other`: 被连接的链表
        ///
        /// # 返回值
        /// 返回一个新链表，依次包含 `self` 和 `other` 中每个元素的
        /// 深拷贝副本，两个输入链表均保持不变
        ///
        /// 复杂度: O(n + m)
        pub fn concat(&self, other: &Self) -> Self {
            self.iter().chain(other.iter()).cloned().collect()
        }

        /// 返回一个元素顺序相反的新链表
        ///
        /// 新链表中的元素为原链表元素的深拷贝副本，两个链表互不影响
        ///
        /// 复杂度: O(n)
        pub fn reversed(&self) -> Self {
            let mut list = DoublyLinkedList::new();
            for item in self.iter() {
                list.push_front(item.clone());
            }
            list
        }

        /// 按谓词筛选元素，返回一个新链表
        ///
        /// # 参数
        /// - `pred`: 谓词函数，返回 `true` 的元素会被深拷贝进新链表
        ///
        /// 复杂度: O(n)
        pub fn filter<P>(&self, mut pred: P) -> Self
        where
            P: FnMut(&T) -> bool,
        {
            self.iter().filter(|item| pred(*item)).cloned().collect()
        }
    }

    // 移除操作
    impl<T: PartialEq> DoublyLinkedList<T> {
        /// 移除链表中第一个与指定值相等的元素
        ///
        /// # 参数
        /// - `data`: 要移除的元素的引用
        ///
        /// # 返回值
        /// 找到并移除了匹配节点时返回 `true`，否则返回 `false`
        pub fn remove(&mut self, data: &T) -> bool {
            let mut current = self.head;

            while !current.is_null() {
                unsafe {
                    if &(*current).data == data {
                        self.unlink(current);
                        let _ = Box::from_raw(current);
                        self.len -= 1;
                        return true;
                    }
                    current = (*current).next;
                }
            }
            false
        }

        /// 移除链表中所有与指定值相等的元素
        ///
        /// # 参数
        /// - `data`: 要移除的元素的引用
        ///
        /// # 返回值
        /// 返回成功移除的节点数量
        pub fn remove_all(&mut self, data: &T) -> usize {
            let mut count = 0;
            let mut current = self.head;

            while !current.is_null() {
                unsafe {
                    let next = (*current).next;

                    if &(*current).data == data {
                        self.unlink(current);
                        let _ = Box::from_raw(current);
                        self.len -= 1;
                        count += 1;
                    }
                    current = next;
                }
            }
            count
        }
    }

    impl<T> DoublyLinkedList<T> {
        // 将节点从链中摘除，不释放节点本身，调用方负责释放并维护 len
        unsafe fn unlink(&mut self, node: *mut Node<T>) {
            unsafe {
                if !(*node).prev.is_null() {
                    (*(*node).prev).next = (*node).next;
                } else {
                    self.head = (*node).next;
                }

                if !(*node).next.is_null() {
                    (*(*node).next).prev = (*node).prev;
                } else {
                    self.tail = (*node).prev;
                }
            }
        }
    }

    // 迭代器实现
    impl<T> DoublyLinkedList<T> {
        /// 创建一个从头到尾遍历链表的不可变迭代器
        pub fn iter(&self) -> Iter<'_, T> {
            Iter {
                current: self.head,
                marker: PhantomData,
            }
        }

        /// 创建一个从头到尾遍历链表的可变迭代器
        pub fn iter_mut(&mut self) -> IterMut<'_, T> {
            IterMut {
                current: self.head,
                marker: PhantomData,
            }
        }

        /// 创建一个消费型迭代器，逐个取得链表元素的所有权
        pub fn into_iter(self) -> IntoIter<T> {
            IntoIter { list: self }
        }
    }

    // 前向不可变迭代器
    pub struct Iter<'a, T> {
        current: *mut Node<T>,
        marker: PhantomData<&'a Node<T>>,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;

        fn next(&mut self) -> Option<Self::Item> {
            if self.current.is_null() {
                None
            } else {
                unsafe {
                    let item = &(*self.current).data;
                    self.current = (*self.current).next;
                    Some(item)
                }
            }
        }
    }

    // 前向可变迭代器
    pub struct IterMut<'a, T> {
        current: *mut Node<T>,
        marker: PhantomData<&'a mut Node<T>>,
    }

    impl<'a, T> Iterator for IterMut<'a, T> {
        type Item = &'a mut T;

        fn next(&mut self) -> Option<Self::Item> {
            if self.current.is_null() {
                None
            } else {
                unsafe {
                    let item = &mut (*self.current).data;
                    self.current = (*self.current).next;
                    Some(item)
                }
            }
        }
    }

    // 消费迭代器
    pub struct IntoIter<T> {
        list: DoublyLinkedList<T>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;

        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop_front()
        }
    }

    // 从迭代器创建链表
    impl<T> FromIterator<T> for DoublyLinkedList<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            let mut list = DoublyLinkedList::new();
            for item in iter {
                list.push_back(item);
            }
            list
        }
    }

    // 链表转换为迭代器
    impl<T> IntoIterator for DoublyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;

        fn into_iter(self) -> Self::IntoIter {
            self.into_iter()
        }
    }

    // 格式化输出
    impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.iter()).finish()
        }
    }

    // 清理资源
    impl<T> Drop for DoublyLinkedList<T> {
        /// 析构时依次释放所有节点，每个元素的析构逻辑恰好执行一次
        fn drop(&mut self) {
            while self.pop_front().is_some() {}
        }
    }

    // 克隆实现
    impl<T: Clone> Clone for DoublyLinkedList<T> {
        /// 创建链表的深拷贝副本，逐元素调用 `T::clone`
        fn clone(&self) -> Self {
            self.iter().cloned().collect()
        }
    }

    // 默认实现
    impl<T> Default for DoublyLinkedList<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    // 逐元素比较
    impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
        fn eq(&self, other: &Self) -> bool {
            self.len == other.len && self.iter().eq(other.iter())
        }
    }

    impl<T: Eq> Eq for DoublyLinkedList<T> {}

    // 序列化为普通序列，反序列化时按原顺序重建链表
    impl<T: Serialize> Serialize for DoublyLinkedList<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for DoublyLinkedList<T> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct ListVisitor<T>(PhantomData<T>);

            impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
                type Value = DoublyLinkedList<T>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("一个元素序列")
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mut list = DoublyLinkedList::new();
                    while let Some(item) = seq.next_element()? {
                        list.push_back(item);
                    }
                    Ok(list)
                }
            }

            deserializer.deserialize_seq(ListVisitor(PhantomData))
        }
    }

}
